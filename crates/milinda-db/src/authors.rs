//! Database operations for the `authors` table.

use milinda_core::Author;
use sqlx::sqlite::{SqliteConnection, SqlitePool};

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `authors` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthorRow {
    pub id: i64,
    pub name: String,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Author {
            id: row.id,
            name: row.name,
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Returns the author with exactly this name, or `None`.
///
/// The comparison is case-sensitive; no normalization is applied.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn find_author_by_name(
    pool: &SqlitePool,
    name: &str,
) -> Result<Option<AuthorRow>, DbError> {
    let row = sqlx::query_as::<_, AuthorRow>("SELECT id, name FROM authors WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

/// Returns the id of the author named `name`, inserting the author first if
/// no such row exists.
///
/// Takes a connection so callers can run it inside their own transaction.
///
/// # Errors
///
/// Returns [`DbError::EmptyAuthorName`] for an empty name, or
/// [`DbError::Sqlx`] if either statement fails.
pub async fn get_or_create_author(conn: &mut SqliteConnection, name: &str) -> Result<i64, DbError> {
    if name.is_empty() {
        return Err(DbError::EmptyAuthorName);
    }

    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM authors WHERE name = ?")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;

    if let Some(id) = existing {
        return Ok(id);
    }

    let result = sqlx::query("INSERT INTO authors (name) VALUES (?)")
        .bind(name)
        .execute(&mut *conn)
        .await?;

    let id = result.last_insert_rowid();
    tracing::debug!(author = name, id, "inserted author");
    Ok(id)
}

/// Returns every author in id order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_authors(pool: &SqlitePool) -> Result<Vec<AuthorRow>, DbError> {
    let rows = sqlx::query_as::<_, AuthorRow>("SELECT id, name FROM authors ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Returns the number of rows in `authors`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_authors(pool: &SqlitePool) -> Result<i64, DbError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
