//! Relational storage for people, papers, roles, and reviews.
//!
//! All access goes through an explicitly constructed [`Database`] handle that
//! lives for one run; nothing here keeps process-wide connection state.

pub mod papers;
pub mod people;
pub mod reviews;
pub mod schema;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use tracing::info;

use crate::error::Result;

/// Open transaction on the store. Dropping it without `commit` rolls back.
pub type Tx = Transaction<'static, Sqlite>;

/// Connection handle scoped to a single pipeline run.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (creating if needed) the database at `url` with foreign keys
    /// enforced.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;
        info!(url, "connected to database");
        Ok(Self { pool })
    }

    /// Private in-memory database. The pool is pinned to one connection that
    /// never expires, since each SQLite memory connection is its own database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn begin(&self) -> Result<Tx> {
        Ok(self.pool.begin().await?)
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}
