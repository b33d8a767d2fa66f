use serde::Serialize;
use sqlx::PgPool;

use infra::models::{CountryRow, PlayerSearchRow, PositionRow, TournamentRow};
use infra::repos::{countries, players, positions, tournaments};

use crate::error::AppError;
use crate::roster::Roster;

/// Shortest accepted search term, in characters, after trimming.
pub const MIN_SEARCH_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentDetail {
    #[serde(flatten)]
    pub tournament: TournamentRow,
    #[serde(rename = "jugadores")]
    pub roster: Roster,
}

pub async fn list_countries(pool: &PgPool) -> Result<Vec<CountryRow>, AppError> {
    Ok(countries::list(pool).await?)
}

pub async fn list_tournaments_by_country(
    pool: &PgPool,
    country_id: i32,
) -> Result<Vec<TournamentRow>, AppError> {
    Ok(tournaments::list_by_country(pool, country_id).await?)
}

pub async fn list_tournaments(pool: &PgPool) -> Result<Vec<TournamentRow>, AppError> {
    Ok(tournaments::list(pool).await?)
}

pub async fn list_positions(pool: &PgPool) -> Result<Vec<PositionRow>, AppError> {
    Ok(positions::list(pool).await?)
}

/// Tournament with its roster split into starters and substitutes.
pub async fn get_tournament_detail(
    pool: &PgPool,
    tournament_id: i32,
) -> Result<TournamentDetail, AppError> {
    let tournament = tournaments::get_by_id(pool, tournament_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("tournament {tournament_id} not found")))?;

    let players = players::list_by_tournament(pool, tournament_id).await?;

    Ok(TournamentDetail {
        tournament,
        roster: Roster::from_players(players),
    })
}

/// Checks a raw search input and returns the trimmed term to match on.
pub fn validate_search_query(query: &str) -> Result<&str, AppError> {
    let term = query.trim();
    if term.chars().count() < MIN_SEARCH_CHARS {
        return Err(AppError::Validation("query too short".to_string()));
    }
    Ok(term)
}

pub async fn search_players(pool: &PgPool, query: &str) -> Result<Vec<PlayerSearchRow>, AppError> {
    let term = validate_search_query(query)?;
    let hits = players::search(pool, term).await?;
    tracing::debug!(term, hits = hits.len(), "Player search");
    Ok(hits)
}
