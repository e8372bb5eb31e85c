//! SQLite pool construction and schema migrations
//!
//! Domain repositories receive a [`DbPool`] and never open connections
//! themselves.

use std::str::FromStr;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::Config;
use crate::error::Result;

pub type DbPool = SqlitePool;

/// Schema migrations embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Open (creating if missing) the configured database and bring the schema
/// up to date.
pub async fn connect(config: &Config) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_with(options)
        .await?;

    MIGRATOR.run(&pool).await?;

    tracing::info!(
        database_url = %config.database_url,
        max_connections = config.database_max_connections,
        "Database ready"
    );

    Ok(pool)
}

/// Private in-memory database holding a single connection for its whole life.
///
/// Every query runs on that one connection, so code holding an open
/// transaction must route all of its statements through the transaction.
pub async fn connect_in_memory() -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    MIGRATOR.run(&pool).await?;

    Ok(pool)
}
