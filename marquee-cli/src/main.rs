//! Marquee CLI - Command-line interface
//!
//! Starts the web server or runs one-off searches from the terminal.

mod commands;

use std::path::PathBuf;

use clap::Parser;
use marquee_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Search a movie database from the browser or the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,

    /// Console log level (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value = "info", global = true)]
    log_level: CliLogLevel,

    /// Also write a full debug log of this run into the given directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.log_level.as_tracing_level(), cli.log_dir.as_deref())?;

    match &dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded environment file"),
        Err(e) if is_unreadable_env_file(e) => {
            tracing::warn!(error = %e, "Ignoring .env file that could not be loaded");
        }
        Err(_) => {}
    }

    commands::handle_command(cli.command).await
}

/// A missing `.env` is normal; anything else means the file exists but is broken.
fn is_unreadable_env_file(error: &dotenvy::Error) -> bool {
    !error.not_found()
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_missing_env_file_is_not_reported() {
        let error = dotenvy::Error::Io(io::Error::new(io::ErrorKind::NotFound, "no .env"));
        assert!(!is_unreadable_env_file(&error));
    }

    #[test]
    fn test_malformed_env_file_is_reported() {
        let error = dotenvy::Error::LineParse("TMDB_API_KEY=\"unterminated".to_string(), 13);
        assert!(is_unreadable_env_file(&error));
    }
}
