use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::routes::{countries, players, positions, tournaments};
use crate::state::AppState;

/// Build the Axum router: health check plus the `/api` resource routes.
pub fn build_router(state: AppState) -> Router {
    let config = state.config().clone();

    let api = Router::new()
        .route("/paises", get(countries::list).post(countries::create))
        .route("/paises/{id}/mundiales", get(countries::tournaments))
        .route("/mundiales", get(tournaments::list).post(tournaments::create))
        .route("/mundiales/{id}", get(tournaments::detail))
        .route("/jugadores", post(players::create))
        .route("/jugadores/buscar", get(players::search))
        .route("/posiciones", get(positions::list));

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    Router::new()
        // Simple liveness check; also proves DB connectivity.
        .route("/health", get(health))
        .nest("/api", api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE]),
        )
}

/// Liveness plus a round trip to the store.
async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&state.db).await?;
    Ok("ok")
}
