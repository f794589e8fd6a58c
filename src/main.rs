use clap::Parser;
use snippets::{get_log_file_path, logging, run, Snippets};
use std::error::Error;
use std::process;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Snippets::parse();

    let log_file = args.log_file.clone().unwrap_or_else(get_log_file_path);
    if let Err(e) = logging::init(&log_file) {
        eprintln!("Warning: logging disabled ({}): {}", log_file.display(), e);
    }
    debug!(command = ?args.command, "Parsed command line");

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}
