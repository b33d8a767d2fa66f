use axum::{extract::State, Json};

use infra::models::PositionRow;

use crate::error::AppError;
use crate::services::roster_query;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PositionRow>>, AppError> {
    Ok(Json(roster_query::list_positions(&state.db).await?))
}
