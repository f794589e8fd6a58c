use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{DATABASE_URL_ENV, DEFAULT_DATABASE_URL, LOG_FILE_ENV};

#[derive(Parser, Debug)]
#[command(
    author = "Ben Altieri",
    version = env!("CARGO_PKG_VERSION"),
    about = "Store and retrieve snippets of text",
)]
pub struct Snippets {
    #[clap(
        long,
        global = true,
        env = DATABASE_URL_ENV,
        default_value = DEFAULT_DATABASE_URL,
        help = "Database to store snippets in (postgres:// or sqlite:)"
    )]
    pub database_url: String,

    #[clap(
        long,
        global = true,
        env = LOG_FILE_ENV,
        help = "Log file [default: ~/.snippets/snippets.log]"
    )]
    pub log_file: Option<PathBuf>,

    #[clap(long, global = true, help = "Print results as JSON")]
    pub json: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Store a snippet
    Put {
        #[clap(help = "Name of the snippet")]
        name: String,

        #[clap(help = "Snippet text")]
        snippet: String,
    },
    /// Retrieve a snippet
    Get {
        #[clap(help = "Name of the snippet")]
        name: String,
    },
    /// Create a catalog view of snippets stored in the database
    Catalog,
    /// Search all snippet messages for a substring
    Search {
        #[clap(help = "String to search within the message portion of the snippet")]
        string_to_search: String,
    },
}
