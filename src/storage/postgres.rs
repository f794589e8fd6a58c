//! PostgreSQL snippet store
//!
//! The default backend for the `snippets` table. Holds a single
//! [`PgConnection`]; every statement auto-commits, so a successful `store`
//! is durable by the time it returns.

use async_trait::async_trait;
use sqlx::{Connection, PgConnection};
use tracing::debug;

use super::{contains_pattern, SnippetStore};
use crate::error::{Result, SnippetsError};
use crate::models::Snippet;

pub struct PostgresStore {
    conn: PgConnection,
}

impl PostgresStore {
    /// Open one connection to the database at `url`
    ///
    /// # Errors
    ///
    /// Returns `SnippetsError::Connection` if the server cannot be reached
    /// or rejects the credentials.
    pub async fn connect(url: &str) -> Result<Self> {
        let conn = PgConnection::connect(url)
            .await
            .map_err(|e| SnippetsError::connection("failed to connect to PostgreSQL", e))?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl SnippetStore for PostgresStore {
    async fn initialize(&mut self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS snippets (
                keyword TEXT PRIMARY KEY,
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
            INSERT INTO snippets (keyword, message) VALUES ($1, $2)
            ON CONFLICT (keyword) DO UPDATE SET message = EXCLUDED.message
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
        sqlx::query_scalar::<_, String>("SELECT message FROM snippets WHERE keyword = $1")
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
            WHERE message LIKE $1 ESCAPE '\'
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
            .map_err(|e| SnippetsError::connection("failed to close PostgreSQL connection", e))?;
        debug!("Database connection closed");
        Ok(())
    }
}
