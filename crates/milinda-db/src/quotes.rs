//! Database operations for the `quotes` table.

use milinda_core::{Quote, QuoteEntry};
use sqlx::sqlite::SqlitePool;

use crate::authors::get_or_create_author;
use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `quotes` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct QuoteRow {
    pub id: i64,
    pub author_id: i64,
    pub content: String,
}

impl From<QuoteRow> for Quote {
    fn from(row: QuoteRow) -> Self {
        Quote {
            id: row.id,
            author_id: row.author_id,
            content: row.content,
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Store a quote attributed to `author_name` and return the new quote id.
///
/// The author is looked up by exact name and inserted if missing. Both
/// statements commit together. Two callers adding a quote for the same new
/// author at once can still race on the author insert; the `UNIQUE`
/// constraint turns the loser into an error.
///
/// # Errors
///
/// Returns [`DbError::EmptyAuthorName`] or [`DbError::EmptyContent`] for
/// empty input, or [`DbError::Sqlx`] if any statement fails.
pub async fn add_quote(
    pool: &SqlitePool,
    author_name: &str,
    content: &str,
) -> Result<i64, DbError> {
    if content.is_empty() {
        return Err(DbError::EmptyContent);
    }

    let mut tx = pool.begin().await?;
    let author_id = get_or_create_author(&mut *tx, author_name).await?;

    let result = sqlx::query("INSERT INTO quotes (author_id, content) VALUES (?, ?)")
        .bind(author_id)
        .bind(content)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    let id = result.last_insert_rowid();
    tracing::debug!(author = author_name, author_id, id, "inserted quote");
    Ok(id)
}

/// Returns every quote joined with its author's name.
///
/// No `ORDER BY` is applied: rows come back in whatever order the engine
/// scans them, which for this schema is insertion order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_all_quotes(pool: &SqlitePool) -> Result<Vec<QuoteEntry>, DbError> {
    let rows = sqlx::query_as::<_, (String, String)>(
        "SELECT a.name, q.content \
         FROM quotes q \
         JOIN authors a ON q.author_id = a.id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(author, content)| QuoteEntry { author, content })
        .collect())
}

/// Returns a single quote by id, or `None` if not found.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_quote_by_id(pool: &SqlitePool, id: i64) -> Result<Option<QuoteRow>, DbError> {
    let row =
        sqlx::query_as::<_, QuoteRow>("SELECT id, author_id, content FROM quotes WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(row)
}

/// Returns the number of rows in `quotes`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_quotes(pool: &SqlitePool) -> Result<i64, DbError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quotes")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
