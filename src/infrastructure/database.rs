use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(max_connections, "database pool ready");
    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Single-connection in-memory database with migrations applied. Every
/// connection to `sqlite::memory:` is a separate database, hence one connection.
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = init_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory sqlite pool");
    run_migrations(&pool).await.expect("migrations");
    pool
}
