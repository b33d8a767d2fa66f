use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Field names on the wire follow the client contract (`nombre`, `anio`, ...),
// columns are aliased to the Rust names in the repo queries.

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct CountryRow {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// A tournament joined with its host country's name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct TournamentRow {
    pub id: i32,
    #[serde(rename = "anio")]
    pub year: i32,
    #[serde(rename = "pais_id")]
    pub country_id: i32,
    #[serde(rename = "pais")]
    pub country_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct PositionRow {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "abreviatura")]
    pub abbreviation: String,
}

/// One roster line of a tournament detail.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct RosterPlayerRow {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "posicion")]
    pub position_name: String,
    #[serde(rename = "posicion_id")]
    pub position_id: i32,
    #[serde(rename = "posicion_abr")]
    pub position_abbreviation: String,
    pub titular: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct PlayerSearchRow {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "posicion")]
    pub position_name: String,
    #[serde(rename = "pais")]
    pub country_name: String,
    #[serde(rename = "anio")]
    pub year: i32,
    pub titular: bool,
}

/// Fully joined player projection: player + position + tournament + host country.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct PlayerDetailRow {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "posicion_id")]
    pub position_id: i32,
    #[serde(rename = "posicion")]
    pub position_name: String,
    #[serde(rename = "mundial_id")]
    pub tournament_id: i32,
    #[serde(rename = "anio")]
    pub year: i32,
    #[serde(rename = "pais")]
    pub country_name: String,
    pub titular: bool,
}
