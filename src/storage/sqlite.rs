//! SQLite snippet store
//!
//! File-backed (or in-memory) alternative to PostgreSQL, handy for local
//! use and for tests. SQLite's `LIKE` ignores ASCII case by default, so
//! `search` is case-insensitive here.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use std::str::FromStr;
use tracing::debug;

use super::{contains_pattern, SnippetStore};
use crate::error::{Result, SnippetsError};
use crate::models::Snippet;

pub struct SqliteStore {
    conn: SqliteConnection,
}

impl SqliteStore {
    /// Open the database at `url`, creating the file if needed
    ///
    /// * `sqlite::memory:` - in-memory database, gone when the store closes
    /// * `sqlite:///path/to/snippets.db` - file-based database
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| SnippetsError::connection("invalid SQLite URL", e))?
            .create_if_missing(true);

        let conn = SqliteConnection::connect_with(&options)
            .await
            .map_err(|e| SnippetsError::connection("failed to open SQLite database", e))?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl SnippetStore for SqliteStore {
    async fn initialize(&mut self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS snippets (
                keyword TEXT PRIMARY KEY NOT NULL,
                message TEXT NOT NULL
            )
            "#,
        )
        .execute(&mut self.conn)
        .await
        .map_err(|e| SnippetsError::schema("failed to create snippets table", e))?;
        Ok(())
    }

    async fn store(&mut self, name: &str, text: &str) -> Result<Snippet> {
        let snippet = sqlx::query_as::<_, Snippet>(
            r#"
            INSERT INTO snippets (keyword, message) VALUES (?, ?)
            ON CONFLICT (keyword) DO UPDATE SET message = excluded.message
            RETURNING keyword, message
            "#,
        )
        .bind(name)
        .bind(text)
        .fetch_one(&mut self.conn)
        .await
        .map_err(|e| SnippetsError::query("failed to store snippet", e))?;

        debug!(keyword = %snippet.keyword, "Snippet stored successfully");
        Ok(snippet)
    }

    async fn fetch(&mut self, name: &str) -> Result<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT message FROM snippets WHERE keyword = ?")
            .bind(name)
            .fetch_optional(&mut self.conn)
            .await
            .map_err(|e| SnippetsError::query("failed to fetch snippet", e))
    }

    async fn list_all(&mut self) -> Result<Vec<Snippet>> {
        sqlx::query_as::<_, Snippet>("SELECT keyword, message FROM snippets ORDER BY keyword")
            .fetch_all(&mut self.conn)
            .await
            .map_err(|e| SnippetsError::query("failed to list snippets", e))
    }

    async fn search(&mut self, substring: &str) -> Result<Vec<Snippet>> {
        sqlx::query_as::<_, Snippet>(
            r#"
            SELECT keyword, message FROM snippets
            WHERE message LIKE ? ESCAPE '\'
            ORDER BY keyword
            "#,
        )
        .bind(contains_pattern(substring))
        .fetch_all(&mut self.conn)
        .await
        .map_err(|e| SnippetsError::query("failed to search snippets", e))
    }

    async fn close(self: Box<Self>) -> Result<()> {
        let Self { conn } = *self;
        conn.close()
            .await
            .map_err(|e| SnippetsError::connection("failed to close SQLite database", e))?;
        debug!("Database connection closed");
        Ok(())
    }
}
