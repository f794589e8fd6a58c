//! Snippet storage
//!
//! A snippet store owns exactly one database connection for the lifetime of
//! a command. [`open`] picks the backend from the configured URL, connects,
//! and makes sure the `snippets` table exists; [`SnippetStore::close`]
//! releases the connection.

use async_trait::async_trait;
use tracing::debug;

use crate::config::{Backend, StoreConfig};
use crate::error::Result;
use crate::models::Snippet;

pub mod postgres;
pub mod sqlite;

pub use postgres::PostgresStore;
pub use sqlite::SqliteStore;

/// The four snippet operations plus connection lifecycle
#[async_trait]
pub trait SnippetStore: Send {
    /// Create the `snippets` table if it does not exist yet
    async fn initialize(&mut self) -> Result<()>;

    /// Insert `text` under `name`, replacing any existing message.
    ///
    /// The write is a single `INSERT ... ON CONFLICT DO UPDATE`, so two
    /// concurrent stores for the same name resolve as last-writer-wins.
    async fn store(&mut self, name: &str, text: &str) -> Result<Snippet>;

    /// Look up the message stored under `name`
    async fn fetch(&mut self, name: &str) -> Result<Option<String>>;

    /// All snippets, ordered by keyword
    async fn list_all(&mut self) -> Result<Vec<Snippet>>;

    /// Snippets whose message contains `substring` literally, ordered by keyword
    async fn search(&mut self, substring: &str) -> Result<Vec<Snippet>>;

    /// Close the connection gracefully
    async fn close(self: Box<Self>) -> Result<()>;
}

/// Connect to the configured database and initialize the schema
pub async fn open(config: &StoreConfig) -> Result<Box<dyn SnippetStore>> {
    debug!(backend = ?config.backend, "Connecting to database");
    let store: Box<dyn SnippetStore> = match config.backend {
        Backend::Postgres => Box::new(PostgresStore::connect(&config.url).await?),
        Backend::Sqlite => Box::new(SqliteStore::connect(&config.url).await?),
    };
    debug!("Database connection established");

    initialize_or_close(store).await
}

/// Initialize the schema, closing the connection if that fails.
///
/// The schema error wins over a close error.
pub(crate) async fn initialize_or_close(
    mut store: Box<dyn SnippetStore>,
) -> Result<Box<dyn SnippetStore>> {
    match store.initialize().await {
        Ok(()) => Ok(store),
        Err(e) => {
            let _ = store.close().await;
            Err(e)
        }
    }
}

/// Build a `LIKE` pattern matching `substring` anywhere in a message.
///
/// `%`, `_` and `\` are escaped so they match themselves; queries pair this
/// with `ESCAPE '\'`.
pub(crate) fn contains_pattern(substring: &str) -> String {
    let mut pattern = String::with_capacity(substring.len() + 2);
    pattern.push('%');
    for c in substring.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
