use sqlx::PgPool;

/// Shared handle to the Postgres pool. Cloning is cheap; every clone points at
/// the same set of connections.
pub type Db = PgPool;
