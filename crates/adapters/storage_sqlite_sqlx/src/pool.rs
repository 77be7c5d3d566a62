//! `SQLite` connection setup and migration runner.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::StorageError;

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:covid19India.db` or `sqlite::memory:`).
    pub database_url: String,
    /// Upper bound on open connections. One keeps every request on the same
    /// connection, which `sqlite::memory:` databases require.
    pub max_connections: u32,
}

impl Config {
    /// Build a [`Database`] from this configuration.
    ///
    /// Opens the connection, creates the database file if missing,
    /// and runs all pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or migrations fail.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self.database_url, self.max_connections).await
    }
}

/// The storage client shared by every repository.
///
/// Cloning is cheap and shares the underlying pool.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and run migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or migrations fail.
    async fn initialize(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // connections never expire: an in-memory database lives only as long
        // as its connection
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        tracing::info!(url = %database_url, "database ready");
        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every connection, waiting for in-flight queries to finish.
    ///
    /// Any later query fails with a storage error.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database closed");
    }
}

#[cfg(test)]
pub(crate) async fn memory() -> Database {
    Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
    }
    .build()
    .await
    .unwrap()
}
