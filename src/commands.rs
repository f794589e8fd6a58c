use crate::cli::{Commands, Snippets};
use crate::config::StoreConfig;
use crate::error::Result;
use crate::models::Snippet;
use crate::storage::{self, SnippetStore};
use std::io::{self, Write};
use tracing::{debug, info};

pub const NOT_FOUND: &str = "404: Snippet Not Found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Open the store, run one command against it, and close it again.
pub async fn run(args: Snippets) -> Result<()> {
    let config = StoreConfig::from_url(&args.database_url)?;
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let store = storage::open(&config).await?;
    let mut out = io::stdout().lock();
    run_and_close(store, args.command, format, &mut out).await
}

/// Run `command`, then close `store` whether or not the command succeeded.
///
/// The command's error wins over a close error.
pub async fn run_and_close(
    mut store: Box<dyn SnippetStore>,
    command: Commands,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let result = handle_command(store.as_mut(), command, format, out).await;
    let closed = store.close().await;

    result.and(closed)
}

pub async fn handle_command(
    store: &mut dyn SnippetStore,
    command: Commands,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Commands::Put { name, snippet } => handle_put(store, &name, &snippet, format, out).await,
        Commands::Get { name } => handle_get(store, &name, format, out).await,
        Commands::Catalog => handle_catalog(store, format, out).await,
        Commands::Search { string_to_search } => {
            handle_search(store, &string_to_search, format, out).await
        }
    }
}

async fn handle_put(
    store: &mut dyn SnippetStore,
    name: &str,
    snippet: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    info!("Storing snippet {:?}: {:?}", name, snippet);
    let stored = store.store(name, snippet).await?;

    match format {
        OutputFormat::Text => {
            writeln!(out, "Stored {:?} as {:?}", stored.message, stored.keyword)?
        }
        OutputFormat::Json => write_json(out, &stored)?,
    }
    Ok(())
}

async fn handle_get(
    store: &mut dyn SnippetStore,
    name: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    info!("Retrieving snippet for requested keyword: {:?}", name);
    let message = store.fetch(name).await?;
    if message.is_none() {
        debug!(keyword = name, "No snippet found");
    }

    match format {
        OutputFormat::Text => writeln!(out, "{}", message.as_deref().unwrap_or(NOT_FOUND))?,
        OutputFormat::Json => write_json(out, &message)?,
    }
    Ok(())
}

async fn handle_catalog(
    store: &mut dyn SnippetStore,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    info!("Creating a catalog view of all snippets stored in the database");
    let snippets = store.list_all().await?;
    debug!(count = snippets.len(), "Catalog loaded");

    match format {
        OutputFormat::Text if snippets.is_empty() => writeln!(out, "No snippets stored")?,
        OutputFormat::Text => write_lines(out, &snippets)?,
        OutputFormat::Json => write_json(out, &snippets)?,
    }
    Ok(())
}

async fn handle_search(
    store: &mut dyn SnippetStore,
    string_to_search: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    info!(
        "Searching all snippet messages for substring {:?}",
        string_to_search
    );
    let matches = store.search(string_to_search).await?;
    debug!(count = matches.len(), "Search finished");

    match format {
        OutputFormat::Text if matches.is_empty() => {
            writeln!(out, "No snippets contain {:?}", string_to_search)?
        }
        OutputFormat::Text => write_lines(out, &matches)?,
        OutputFormat::Json => write_json(out, &matches)?,
    }
    Ok(())
}

fn write_lines(out: &mut impl Write, snippets: &[Snippet]) -> Result<()> {
    for snippet in snippets {
        writeln!(out, "{}", snippet)?;
    }
    Ok(())
}

fn write_json<T: serde::Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
