use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interest_core::config::{AppConfig, CliConfig, FileConfig};
use interest_core::feed::FeedController;
use interest_core::ingestion::{IngestionManager, PixabayClient, RandomTopicStrategy};
use interest_core::notify::TracingNotifier;
use interest_core::persistence::SqliteSnapshotStore;
use interest_core::store::AppStore;

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the SQLite snapshot database file.
    #[clap(value_parser = parse_path)]
    pub snapshot_db: Option<PathBuf>,

    /// Path to a TOML config file. Its values override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Directory forced downloads are saved into.
    #[clap(long, value_parser = parse_path)]
    pub download_dir: Option<PathBuf>,

    /// Search API key.
    #[clap(long)]
    pub api_key: Option<String>,

    /// Timeout in seconds for search API requests.
    #[clap(long, default_value_t = 30)]
    pub api_timeout_sec: u64,

    /// Run an administrative seeding pass before showing the feed.
    #[clap(long)]
    pub seed: bool,

    /// Activate a search query before showing the feed.
    #[clap(long)]
    pub query: Option<String>,

    /// Number of near-bottom scroll signals to simulate.
    #[clap(long, default_value_t = 0)]
    pub scroll: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let cli_config = CliConfig {
        db_path: cli_args.snapshot_db,
        download_dir: cli_args.download_dir,
        api_key: cli_args.api_key,
        api_timeout_sec: cli_args.api_timeout_sec,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!("Opening snapshot database at {:?}...", config.db_path);
    let snapshots = Arc::new(SqliteSnapshotStore::new(&config.db_path)?);
    let notifier = Arc::new(TracingNotifier);
    let store = Arc::new(AppStore::new(snapshots, notifier));

    let api = Arc::new(
        PixabayClient::new(&config.ingestion.api_key, config.ingestion.timeout_sec)
            .context("Failed to create search API client")?,
    );
    let ingestor = Arc::new(IngestionManager::new(
        api,
        store.clone(),
        Arc::new(RandomTopicStrategy),
        config.ingestion.clone(),
    ));
    let feed = FeedController::new(store.clone(), ingestor.clone(), config.feed.clone());

    info!(
        "Loaded {} pins across {} users",
        store.pin_count(),
        store.users().len()
    );

    if cli_args.seed {
        info!("Running administrative seeding pass...");
        match ingestor.seed().await {
            Ok(count) => info!("Seeded {} new pins", count),
            Err(err) => info!("Seeding failed, catalog unchanged: {}", err),
        }
    }

    if let Some(query) = &cli_args.query {
        store.set_search_query(query);
        feed.ensure_backfill().await;
    }

    for _ in 0..cli_args.scroll {
        feed.near_bottom().await;
    }

    let visible = feed.visible();
    info!(
        "Feed: showing {} of {} matching pins ({} total)",
        visible.len(),
        feed.filtered().len(),
        store.pin_count()
    );
    for pin in visible.iter().take(10) {
        info!("  [{}] {} by {}", pin.id, pin.title, pin.author_id);
    }

    Ok(())
}
