use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use infra::models::PlayerSearchRow;

use crate::error::AppError;
use crate::services::{
    registration, registration::RegisterPlayer, registration::RegisteredPlayer, roster_query,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<PlayerSearchRow>>, AppError> {
    let Query(query) = query?;
    Ok(Json(roster_query::search_players(&state.db, &query.q).await?))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<RegisterPlayer>, JsonRejection>,
) -> Result<Json<RegisteredPlayer>, AppError> {
    let Json(input) = payload?;
    Ok(Json(registration::register_player(&state.db, input).await?))
}
