//! Pool construction and schema bootstrap

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::config::DatabaseConfig;

const BOOTSTRAP_SQL: &str = include_str!("../../migrations/0001_create_assets.sql");

/// Open a pool for the configured store and make sure the schema exists.
///
/// The database file is created when missing.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    tracing::info!(url = %config.url, max_connections = config.max_connections, "connecting to store");

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    bootstrap(&pool).await?;

    Ok(pool)
}

/// Create the `assets` table and its indexes if absent. Idempotent.
pub async fn bootstrap(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(BOOTSTRAP_SQL).execute(pool).await?;
    tracing::debug!("store schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file_config(dir: &TempDir) -> DatabaseConfig {
        let path = dir.path().join("assets.db");
        DatabaseConfig::with_url(format!("sqlite://{}", path.display()))
    }

    #[tokio::test]
    async fn test_connect_creates_database_file() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir);

        let pool = connect(&config).await.unwrap();
        assert!(dir.path().join("assets.db").exists());

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assets")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let pool = connect(&file_config(&dir)).await.unwrap();

        bootstrap(&pool).await.unwrap();
        bootstrap(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_path_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("assets.db");
        let config = DatabaseConfig::with_url(format!("sqlite://{}", path.display()));
        assert!(connect(&config).await.is_err());
    }
}
