use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::PositionRow;

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<PositionRow>> {
    sqlx::query_as::<_, PositionRow>(
        r#"
        SELECT id, nombre AS name, abreviatura AS abbreviation
        FROM posiciones
        ORDER BY id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}
