//! Snippets - store and retrieve named snippets of text.
//!
//! Snippets live in a single `snippets(keyword, message)` table in
//! PostgreSQL or SQLite. The command line offers `put`, `get`, `catalog`
//! and `search`, each running one statement over one connection.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;

// Re-export
pub use cli::{Commands, Snippets};
pub use commands::{handle_command, run, run_and_close, OutputFormat};
pub use config::{get_config_dir, get_log_file_path, Backend, StoreConfig};
pub use error::{Result, SnippetsError};
pub use models::Snippet;
pub use storage::{open, PostgresStore, SnippetStore, SqliteStore};
