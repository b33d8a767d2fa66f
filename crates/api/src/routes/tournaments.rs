use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    Json,
};

use infra::models::TournamentRow;

use crate::error::AppError;
use crate::services::{
    registration, registration::RegisterTournament, roster_query, roster_query::TournamentDetail,
};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TournamentRow>>, AppError> {
    Ok(Json(roster_query::list_tournaments(&state.db).await?))
}

pub async fn detail(
    State(state): State<AppState>,
    tournament_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<TournamentDetail>, AppError> {
    let Path(tournament_id) = tournament_id?;
    Ok(Json(
        roster_query::get_tournament_detail(&state.db, tournament_id).await?,
    ))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<RegisterTournament>, JsonRejection>,
) -> Result<Json<TournamentRow>, AppError> {
    let Json(input) = payload?;
    Ok(Json(
        registration::register_tournament(&state.db, input).await?,
    ))
}
