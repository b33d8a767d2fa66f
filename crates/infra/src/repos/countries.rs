use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::CountryRow;

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<CountryRow>> {
    sqlx::query_as::<_, CountryRow>(
        r#"
        SELECT id, nombre AS name
        FROM paises
        ORDER BY nombre ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: i32) -> SqlxResult<Option<CountryRow>> {
    sqlx::query_as::<_, CountryRow>(
        r#"
        SELECT id, nombre AS name
        FROM paises
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Exact, case-sensitive name lookup.
pub async fn find_by_name<'e>(
    executor: impl PgExecutor<'e>,
    name: &str,
) -> SqlxResult<Option<CountryRow>> {
    sqlx::query_as::<_, CountryRow>(
        r#"
        SELECT id, nombre AS name
        FROM paises
        WHERE nombre = $1
        "#,
    )
    .bind(name)
    .fetch_optional(executor)
    .await
}

/// Inserts a country unless one with the same name already exists.
/// Returns `None` when the unique constraint swallowed the insert.
pub async fn insert_if_absent<'e>(
    executor: impl PgExecutor<'e>,
    name: &str,
) -> SqlxResult<Option<CountryRow>> {
    sqlx::query_as::<_, CountryRow>(
        r#"
        INSERT INTO paises (nombre)
        VALUES ($1)
        ON CONFLICT (nombre) DO NOTHING
        RETURNING id, nombre AS name
        "#,
    )
    .bind(name)
    .fetch_optional(executor)
    .await
}
