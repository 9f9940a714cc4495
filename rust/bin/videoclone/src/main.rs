//! `videoclone`: terminal client for the VideoClone feed.
//!
//! Browses the remote video feed page by page and keeps liked/saved lists
//! and the theme flag in a local redb file.

mod browse;
mod config;
mod view;

use std::path::Path;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use videoclone_feed::request::*;
use videoclone_feed::state::{FeedState, ThemeState};
use videoclone_feed::{FeedClient, FeedContext, Preferences, register_handlers};
use videoclone_flux::Flux;
use videoclone_kv::{KVStore, MemoryStore, RedbStore};

use crate::config::AppConfig;
use crate::view::Screen;

/// VideoClone terminal client.
#[derive(Parser, Debug)]
#[command(name = "videoclone", about = "Browse the VideoClone feed from a terminal")]
struct Cli {
    /// Path to config file (default: ~/.videoclone/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Feed API base URL (overrides the config file).
    #[arg(long = "base-url", global = true)]
    base_url: Option<String>,

    /// Keep preferences in memory only; nothing is written to disk.
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive browser (default).
    Browse,

    /// Print one page of the feed.
    Feed {
        /// Page number, starting at 1.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Print the liked videos.
    Liked,

    /// Print the saved videos.
    Saved,

    /// Toggle dark mode.
    Theme,

    /// Show the effective configuration.
    Config {
        /// Also write it to the config file.
        #[arg(long)]
        write: bool,
    },

    /// Show version.
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the rendered view.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(AppConfig::default_path);
    let mut config = AppConfig::load(&config_path)?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    let command = cli.command.unwrap_or(Commands::Browse);
    match command {
        Commands::Version => {
            println!("videoclone v{}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Commands::Config { write } => {
            print!("{}", toml::to_string_pretty(&config)?);
            if write {
                config.save(&config_path)?;
                println!("# written to {}", config_path.display());
            }
            return Ok(());
        }
        _ => {}
    }

    let flux = Arc::new(build_app(&config, cli.ephemeral)?);

    match command {
        Commands::Browse => browse::run(flux).await?,

        Commands::Feed { page } => {
            if page == 0 {
                anyhow::bail!("Pages start at 1.");
            }
            flux.emit(InitializeReq::at_page(page)).await;
            print!("{}", view::render(&Screen::capture(&flux)));
            if let Some(err) = flux.read::<FeedState>().and_then(|s| s.error) {
                anyhow::bail!("Failed to load page {}: {}", page, err);
            }
        }

        Commands::Liked | Commands::Saved => {
            let path = if matches!(command, Commands::Liked) { "/liked" } else { "/saved" };
            flux.emit(InitializeReq::offline()).await;
            flux.emit(NavigateReq::new(path)).await;
            print!("{}", view::render(&Screen::capture(&flux)));
        }

        Commands::Theme => {
            flux.emit(InitializeReq::offline()).await;
            flux.emit(ToggleThemeReq).await;
            let dark = flux.read::<ThemeState>().unwrap_or_default().dark;
            println!("Theme: {}", if dark { "dark" } else { "light" });
        }

        Commands::Version | Commands::Config { .. } => {}
    }

    Ok(())
}

/// Wire the store, the feed client and the handlers into a Flux instance.
fn build_app(config: &AppConfig, ephemeral: bool) -> anyhow::Result<Flux> {
    let kv: Arc<dyn KVStore> = if ephemeral {
        info!("Preferences: in memory");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(open_store(&config.storage.path)?)
    };

    let client = FeedClient::new(&config.api.base_url, config.api.timeout())?;
    info!("Feed API: {}", client.base_url());

    let ctx = FeedContext::new(Arc::new(client), Arc::new(Preferences::new(kv)));
    let flux = Flux::new();
    register_handlers(&flux, Arc::new(ctx));
    Ok(flux)
}

fn open_store(path: &Path) -> anyhow::Result<RedbStore> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    info!("Preferences: {}", path.display());
    Ok(RedbStore::open(path)?)
}
