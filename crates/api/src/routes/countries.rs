use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    Json,
};

use infra::models::{CountryRow, TournamentRow};

use crate::error::AppError;
use crate::services::{registration, registration::RegisterCountry, roster_query};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CountryRow>>, AppError> {
    Ok(Json(roster_query::list_countries(&state.db).await?))
}

pub async fn tournaments(
    State(state): State<AppState>,
    country_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<TournamentRow>>, AppError> {
    let Path(country_id) = country_id?;
    Ok(Json(
        roster_query::list_tournaments_by_country(&state.db, country_id).await?,
    ))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<RegisterCountry>, JsonRejection>,
) -> Result<Json<CountryRow>, AppError> {
    let Json(input) = payload?;
    Ok(Json(registration::register_country(&state.db, input).await?))
}
