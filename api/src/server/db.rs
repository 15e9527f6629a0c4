//! Connection provider: one MySQL pool per process, built lazily from the
//! five `DB_*` environment variables and never explicitly closed.

use sqlx::mysql::MySqlPool;
use tokio::sync::OnceCell;

static POOL: OnceCell<MySqlPool> = OnceCell::const_new();

/// The process-wide pool. Constructed on first call; every later call returns
/// the same handle.
pub async fn pool() -> Result<&'static MySqlPool, sqlx::Error> {
    POOL.get_or_try_init(connect).await
}

async fn connect() -> Result<MySqlPool, sqlx::Error> {
    let url = connection_url();
    tracing::info!(host = %env_or_empty("DB_HOST"), "connecting to database");
    MySqlPool::connect(&url).await
}

fn connection_url() -> String {
    format!(
        "mysql://{user}:{password}@{host}:{port}/{name}",
        user = env_or_empty("DB_USER"),
        password = env_or_empty("DB_PASSWORD"),
        host = env_or_empty("DB_HOST"),
        port = env_or_empty("DB_PORT"),
        name = env_or_empty("DB_NAME"),
    )
}

// Credentials are taken as-is, without validation; a missing variable leaves a
// hole in the URL and surfaces as the driver's connect error on first use.
fn env_or_empty(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}
