//! Quotebox CLI: random quotes with favorites in the terminal

mod tui;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use quotebox::config::app::LOG_FILE;
use quotebox::config::messages::FETCH_FAILED;
use quotebox::data::{config_dir, FavoritesStore, FileStore, KeyValueStore, MemoryStore, Settings};
use quotebox::network::HttpClient;
use quotebox::providers::QuotableSource;
use quotebox::session::QuoteSession;

#[derive(Parser)]
#[command(name = "quotebox", about = "Random quotes with favorites", version)]
struct Cli {
    /// Quote service base URL (overrides settings.json)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory holding favorites.json and settings.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep favorites in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch one quote and print it
    Random,
    /// Print the numbered favorites list
    Favorites {
        /// Remove every favorite instead of listing
        #[arg(long)]
        clear: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = match cli.data_dir.clone() {
        Some(dir) => dir,
        None => config_dir()?,
    };

    // Logs go to a file while the TUI owns the screen
    let _guard = match cli.command {
        None => Some(init_file_logging(&data_dir)?),
        Some(_) => {
            init_stderr_logging();
            None
        }
    };

    let settings = Settings::load_from_dir(&data_dir);
    let source = build_source(&cli, &settings)?;

    if cli.ephemeral {
        dispatch(cli.command, FavoritesStore::open(MemoryStore::new()), source, &settings)
    } else {
        dispatch(cli.command, FavoritesStore::open(FileStore::new(&data_dir)), source, &settings)
    }
}

fn dispatch<S: KeyValueStore + 'static>(
    command: Option<Command>,
    mut favorites: FavoritesStore<S>,
    source: QuotableSource,
    settings: &Settings,
) -> Result<()> {
    match command {
        None => tui::run(QuoteSession::new(favorites), source, settings),
        Some(Command::Random) => {
            let mut session = QuoteSession::new(favorites);
            match session.refresh(&source) {
                Ok(quote) => {
                    let marker = if session.favorite_status(&quote) { " ♥" } else { "" };
                    println!("{}{}", quote.clipboard_text(), marker);
                    Ok(())
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Fetching quote failed");
                    anyhow::bail!("{FETCH_FAILED} ({e})")
                }
            }
        }
        Some(Command::Favorites { clear: true }) => {
            let count = favorites.len();
            favorites.clear().context("Could not clear favorites")?;
            println!("Cleared {count} favorite(s)");
            Ok(())
        }
        Some(Command::Favorites { clear: false }) => {
            if favorites.is_empty() {
                println!("No favorites yet.");
            }
            for line in favorites.list_lines() {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn build_source(cli: &Cli, settings: &Settings) -> Result<QuotableSource> {
    let client = HttpClient::with_timeouts(
        Duration::from_secs(settings.connect_timeout_secs),
        Duration::from_secs(settings.read_timeout_secs),
    )
    .context("Could not build HTTP client")?;
    let api_url = cli.api_url.as_deref().unwrap_or(&settings.api_url);
    Ok(QuotableSource::with_client(client, api_url))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn init_file_logging(dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create data directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_is_tui() {
        let cli = Cli::try_parse_from(["quotebox"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.ephemeral);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "quotebox",
            "favorites",
            "--clear",
            "--data-dir",
            "/tmp/qb",
            "--ephemeral",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Command::Favorites { clear: true })));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/qb")));
        assert!(cli.ephemeral);
    }

    #[test]
    fn test_api_url_override() {
        let cli = Cli::try_parse_from(["quotebox", "random", "--api-url", "http://localhost:1"]).unwrap();
        let source = build_source(&cli, &Settings::default()).unwrap();
        assert_eq!(source.random_url(), "http://localhost:1/random");
    }

    #[test]
    fn test_api_url_from_settings() {
        let cli = Cli::try_parse_from(["quotebox", "random"]).unwrap();
        let settings = Settings {
            api_url: "http://mirror.example".to_string(),
            ..Settings::default()
        };
        let source = build_source(&cli, &settings).unwrap();
        assert_eq!(source.random_url(), "http://mirror.example/random");
    }
}
