use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use infra::models::{CountryRow, PlayerDetailRow, TournamentRow};
use infra::repos::{countries, players, players::CreatePlayer, tournaments};

use crate::error::AppError;

/// Host name reported when a freshly registered tournament's country cannot be read back.
pub const UNKNOWN_COUNTRY: &str = "Desconocido";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterCountry {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterTournament {
    #[serde(rename = "anio")]
    pub year: Option<i32>,
    #[serde(rename = "pais_id")]
    pub country_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterPlayer {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "mundial_id")]
    pub tournament_id: Option<i32>,
    #[serde(rename = "posicion_id")]
    pub position_id: Option<i32>,
    /// Strict boolean; absent or `null` means substitute.
    pub titular: Option<bool>,
}

/// Player returned by [`register_player`]. The joined fields are only absent
/// when the row could not be read back after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredPlayer {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "posicion_id")]
    pub position_id: i32,
    #[serde(rename = "posicion", skip_serializing_if = "Option::is_none")]
    pub position_name: Option<String>,
    #[serde(rename = "mundial_id")]
    pub tournament_id: i32,
    #[serde(rename = "anio", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(rename = "pais", skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    pub titular: bool,
}

impl From<PlayerDetailRow> for RegisteredPlayer {
    fn from(row: PlayerDetailRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            position_id: row.position_id,
            position_name: Some(row.position_name),
            tournament_id: row.tournament_id,
            year: Some(row.year),
            country_name: Some(row.country_name),
            titular: row.titular,
        }
    }
}

/// Outcome of an insert guarded by a unique constraint.
enum Inserted<T> {
    Created(T),
    AlreadyExists,
}

/// Folds the store's answer to a conflict-tolerant insert into [`Inserted`].
///
/// A unique violation means a concurrent writer won the race and is handled
/// like `ON CONFLICT DO NOTHING`. A foreign-key violation becomes
/// [`AppError::Referential`].
fn classify_insert<T>(
    result: sqlx::Result<Option<T>>,
    references: &str,
) -> Result<Inserted<T>, AppError> {
    match result {
        Ok(Some(created)) => Ok(Inserted::Created(created)),
        Ok(None) => Ok(Inserted::AlreadyExists),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Ok(Inserted::AlreadyExists)
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
            tracing::debug!("Foreign key violation: {db_err}");
            Err(AppError::Referential(format!("{references} does not exist")))
        }
        Err(e) => Err(e.into()),
    }
}

fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{field} is required"))),
    }
}

fn required_id(value: Option<i32>, field: &str) -> Result<i32, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{field} is required")))
}

/// Returns the country named exactly `name`, creating it first if needed.
pub async fn register_country(pool: &PgPool, input: RegisterCountry) -> Result<CountryRow, AppError> {
    let name = required_text(input.name, "nombre")?;

    if let Some(existing) = countries::find_by_name(pool, &name).await? {
        tracing::debug!(country_id = existing.id, "Country already registered");
        return Ok(existing);
    }

    match classify_insert(countries::insert_if_absent(pool, &name).await, "country")? {
        Inserted::Created(country) => {
            tracing::info!(country_id = country.id, name = %country.name, "Registered country");
            Ok(country)
        }
        Inserted::AlreadyExists => countries::find_by_name(pool, &name)
            .await?
            .ok_or_else(|| AppError::Internal(format!("country {name:?} missing after conflict"))),
    }
}

/// Returns the tournament held in `year` by the given country, creating it first if needed.
pub async fn register_tournament(
    pool: &PgPool,
    input: RegisterTournament,
) -> Result<TournamentRow, AppError> {
    let year = required_id(input.year, "anio")?;
    let country_id = required_id(input.country_id, "pais_id")?;

    if let Some(existing) = tournaments::find_by_year_and_country(pool, year, country_id).await? {
        tracing::debug!(tournament_id = existing.id, "Tournament already registered");
        return Ok(existing);
    }

    let inserted = tournaments::insert_if_absent(pool, year, country_id).await;
    match classify_insert(inserted, "country")? {
        Inserted::Created(id) => {
            let country_name = match countries::get_by_id(pool, country_id).await? {
                Some(country) => country.name,
                None => {
                    tracing::warn!(country_id, tournament_id = id, "Host country not readable after insert");
                    UNKNOWN_COUNTRY.to_string()
                }
            };
            tracing::info!(tournament_id = id, year, country_id, "Registered tournament");

            Ok(TournamentRow {
                id,
                year,
                country_id,
                country_name,
            })
        }
        Inserted::AlreadyExists => tournaments::find_by_year_and_country(pool, year, country_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "tournament ({year}, {country_id}) missing after conflict"
                ))
            }),
    }
}

/// Registers a player in a tournament. An existing player with the same name
/// in that tournament is returned untouched, even if position or `titular`
/// differ from this call.
pub async fn register_player(
    pool: &PgPool,
    input: RegisterPlayer,
) -> Result<RegisteredPlayer, AppError> {
    let data = CreatePlayer {
        name: required_text(input.name, "nombre")?,
        tournament_id: required_id(input.tournament_id, "mundial_id")?,
        position_id: required_id(input.position_id, "posicion_id")?,
        titular: input.titular.unwrap_or(false),
    };

    if let Some(existing) = existing_player(pool, &data).await? {
        tracing::debug!(player_id = existing.id, "Player already registered");
        return Ok(existing);
    }

    let inserted = players::insert_if_absent(pool, &data).await;
    match classify_insert(inserted, "tournament or position")? {
        Inserted::Created(id) => {
            tracing::info!(
                player_id = id,
                tournament_id = data.tournament_id,
                "Registered player"
            );
            match players::get_detail(pool, id).await? {
                Some(detail) => Ok(detail.into()),
                None => {
                    tracing::warn!(player_id = id, "Player not readable after insert");
                    Ok(RegisteredPlayer {
                        id,
                        name: data.name,
                        position_id: data.position_id,
                        position_name: None,
                        tournament_id: data.tournament_id,
                        year: None,
                        country_name: None,
                        titular: data.titular,
                    })
                }
            }
        }
        Inserted::AlreadyExists => existing_player(pool, &data).await?.ok_or_else(|| {
            AppError::Internal(format!(
                "player {:?} in tournament {} missing after conflict",
                data.name, data.tournament_id
            ))
        }),
    }
}

async fn existing_player(
    pool: &PgPool,
    data: &CreatePlayer,
) -> Result<Option<RegisteredPlayer>, AppError> {
    let Some(id) =
        players::find_id_by_name_and_tournament(pool, &data.name, data.tournament_id).await?
    else {
        return Ok(None);
    };

    let detail = players::get_detail(pool, id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("player {id} has dangling references")))?;
    Ok(Some(detail.into()))
}
