use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::TournamentRow;

/// All tournaments with their host country, most recent first.
pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(
        r#"
        SELECT m.id, m.anio AS year, p.id AS country_id, p.nombre AS country_name
        FROM mundiales m
        JOIN paises p ON m.pais_id = p.id
        ORDER BY m.anio DESC, m.id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn list_by_country<'e>(
    executor: impl PgExecutor<'e>,
    country_id: i32,
) -> SqlxResult<Vec<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(
        r#"
        SELECT m.id, m.anio AS year, p.id AS country_id, p.nombre AS country_name
        FROM mundiales m
        JOIN paises p ON m.pais_id = p.id
        WHERE m.pais_id = $1
        ORDER BY m.anio ASC
        "#,
    )
    .bind(country_id)
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: i32,
) -> SqlxResult<Option<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(
        r#"
        SELECT m.id, m.anio AS year, p.id AS country_id, p.nombre AS country_name
        FROM mundiales m
        JOIN paises p ON m.pais_id = p.id
        WHERE m.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn find_by_year_and_country<'e>(
    executor: impl PgExecutor<'e>,
    year: i32,
    country_id: i32,
) -> SqlxResult<Option<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(
        r#"
        SELECT m.id, m.anio AS year, p.id AS country_id, p.nombre AS country_name
        FROM mundiales m
        JOIN paises p ON m.pais_id = p.id
        WHERE m.anio = $1 AND m.pais_id = $2
        "#,
    )
    .bind(year)
    .bind(country_id)
    .fetch_optional(executor)
    .await
}

/// Inserts a tournament unless `(year, country_id)` is already taken and
/// returns the new id. `None` means another row holds the key.
pub async fn insert_if_absent<'e>(
    executor: impl PgExecutor<'e>,
    year: i32,
    country_id: i32,
) -> SqlxResult<Option<i32>> {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO mundiales (anio, pais_id)
        VALUES ($1, $2)
        ON CONFLICT (anio, pais_id) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(year)
    .bind(country_id)
    .fetch_optional(executor)
    .await
}
