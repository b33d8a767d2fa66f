use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::{PlayerDetailRow, PlayerSearchRow, RosterPlayerRow};

#[derive(Debug, Clone)]
pub struct CreatePlayer {
    pub name: String,
    pub tournament_id: i32,
    pub position_id: i32,
    pub titular: bool,
}

/// Every player of a tournament with position data, ordered by name under the
/// store's collation. Position grouping is applied by the caller with a stable
/// sort, so this name order survives within each group.
pub async fn list_by_tournament<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: i32,
) -> SqlxResult<Vec<RosterPlayerRow>> {
    sqlx::query_as::<_, RosterPlayerRow>(
        r#"
        SELECT j.id, j.nombre AS name, p.nombre AS position_name, p.id AS position_id,
               p.abreviatura AS position_abbreviation, j.titular
        FROM jugadores j
        JOIN posiciones p ON j.posicion_id = p.id
        WHERE j.mundial_id = $1
        ORDER BY j.nombre ASC, j.id ASC
        "#,
    )
    .bind(tournament_id)
    .fetch_all(executor)
    .await
}

/// Case-insensitive substring search over every tournament. `term` is matched
/// literally: `%`, `_` and `\` carry no wildcard meaning.
pub async fn search<'e>(
    executor: impl PgExecutor<'e>,
    term: &str,
) -> SqlxResult<Vec<PlayerSearchRow>> {
    let pattern = format!("%{}%", escape_like(term));

    sqlx::query_as::<_, PlayerSearchRow>(
        r#"
        SELECT j.id, j.nombre AS name, pos.nombre AS position_name, p.nombre AS country_name,
               m.anio AS year, j.titular
        FROM jugadores j
        JOIN mundiales m ON j.mundial_id = m.id
        JOIN paises p ON m.pais_id = p.id
        JOIN posiciones pos ON j.posicion_id = pos.id
        WHERE j.nombre ILIKE $1 ESCAPE '\'
        ORDER BY m.anio DESC, j.nombre ASC
        "#,
    )
    .bind(pattern)
    .fetch_all(executor)
    .await
}

pub async fn get_detail<'e>(
    executor: impl PgExecutor<'e>,
    id: i32,
) -> SqlxResult<Option<PlayerDetailRow>> {
    sqlx::query_as::<_, PlayerDetailRow>(
        r#"
        SELECT j.id, j.nombre AS name, pos.id AS position_id, pos.nombre AS position_name,
               m.id AS tournament_id, m.anio AS year, p.nombre AS country_name, j.titular
        FROM jugadores j
        JOIN mundiales m ON j.mundial_id = m.id
        JOIN paises p ON m.pais_id = p.id
        JOIN posiciones pos ON j.posicion_id = pos.id
        WHERE j.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Returns the id of the player holding `name` in the tournament, if any.
pub async fn find_id_by_name_and_tournament<'e>(
    executor: impl PgExecutor<'e>,
    name: &str,
    tournament_id: i32,
) -> SqlxResult<Option<i32>> {
    sqlx::query_scalar::<_, i32>(
        r#"
        SELECT id
        FROM jugadores
        WHERE nombre = $1 AND mundial_id = $2
        "#,
    )
    .bind(name)
    .bind(tournament_id)
    .fetch_optional(executor)
    .await
}

/// Inserts a player unless the name is already taken in the tournament and
/// returns the new id.
pub async fn insert_if_absent<'e>(
    executor: impl PgExecutor<'e>,
    data: &CreatePlayer,
) -> SqlxResult<Option<i32>> {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO jugadores (nombre, mundial_id, posicion_id, titular)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (nombre, mundial_id) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(&data.name)
    .bind(data.tournament_id)
    .bind(data.position_id)
    .bind(data.titular)
    .fetch_optional(executor)
    .await
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
