//! SQLite-backed quote store.
//!
//! The store is a single file holding two tables, `authors` and `quotes`.
//! Callers open it with [`connect`], make sure the tables exist with
//! [`create_schema`], and release it with [`close`] when done.

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 10;

const SCHEMA_SQL: &str = include_str!("schema.sql");

#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    pub acquire_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl PoolConfig {
    #[must_use]
    pub fn from_app_config(config: &milinda_core::AppConfig) -> Self {
        Self {
            acquire_timeout_secs: config.db_acquire_timeout_secs,
        }
    }
}

#[derive(Debug, Error)]
pub enum DbError {
    #[error("author name must not be empty")]
    EmptyAuthorName,
    #[error("quote content must not be empty")]
    EmptyContent,
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Open the quote store at `path`, creating the file if it does not exist.
///
/// The handle holds a single connection with foreign keys enforced. Failures
/// are logged before being returned.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the file cannot be opened or created.
pub async fn connect(path: &Path, config: PoolConfig) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await
        .map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to open quote store");
            DbError::from(e)
        })?;

    tracing::debug!(path = %path.display(), "quote store opened");
    Ok(pool)
}

/// Create the `authors` and `quotes` tables if they do not exist yet.
///
/// Safe to run against an already-initialized store.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if a statement fails. The error is logged first.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), DbError> {
    let mut tx = pool.begin().await.map_err(schema_error)?;

    for statement in SCHEMA_SQL.split(';') {
        let trimmed = statement.trim();
        if trimmed.is_empty() {
            continue;
        }
        sqlx::query(trimmed)
            .execute(&mut *tx)
            .await
            .map_err(schema_error)?;
    }

    tx.commit().await.map_err(schema_error)?;
    tracing::debug!("quote store schema ready");
    Ok(())
}

fn schema_error(e: sqlx::Error) -> DbError {
    tracing::error!(error = %e, "failed to create quote store schema");
    DbError::from(e)
}

/// Send a `SELECT 1` to verify the handle has a live connection.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}

/// Close the handle, waiting for the connection to be released.
#[allow(clippy::needless_pass_by_value)]
pub async fn close(pool: SqlitePool) {
    pool.close().await;
    tracing::debug!("quote store closed");
}

pub mod authors;
pub mod quotes;

pub use authors::{
    count_authors, find_author_by_name, get_or_create_author, list_authors, AuthorRow,
};
pub use quotes::{add_quote, count_quotes, get_all_quotes, get_quote_by_id, QuoteRow};
