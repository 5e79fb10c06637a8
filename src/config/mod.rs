mod file_config;

pub use file_config::{FeedConfig, FileConfig, GateConfig, IngestionConfig};

use std::path::PathBuf;

use anyhow::Result;

/// Published unlimited-quota key the app ships with. Overridable via CLI or
/// config file.
pub const DEFAULT_API_KEY: &str = "54558485-4c58201892e3133e1742642a5";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub db_path: Option<PathBuf>,
    pub download_dir: Option<PathBuf>,
    pub api_key: Option<String>,
    pub api_timeout_sec: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            download_dir: None,
            api_key: None,
            api_timeout_sec: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Snapshot database file.
    pub db_path: PathBuf,
    /// Directory forced downloads land in.
    pub download_dir: PathBuf,

    // Feature configs (with defaults)
    pub ingestion: IngestionSettings,
    pub feed: FeedSettings,
    pub gate: GateSettings,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let db_path = file
            .db_path
            .map(PathBuf::from)
            .or_else(|| cli.db_path.clone())
            .unwrap_or_else(|| PathBuf::from("interest.db"));

        let download_dir = file
            .download_dir
            .map(PathBuf::from)
            .or_else(|| cli.download_dir.clone())
            .unwrap_or_else(|| PathBuf::from("downloads"));

        let api_key = file
            .api_key
            .or_else(|| cli.api_key.clone())
            .unwrap_or_else(|| DEFAULT_API_KEY.to_string());

        let timeout_sec = file.api_timeout_sec.unwrap_or(cli.api_timeout_sec);

        let ing_file = file.ingestion.unwrap_or_default();
        let ingestion = IngestionSettings {
            api_key,
            timeout_sec,
            interactive_per_page: ing_file.interactive_per_page.unwrap_or(50),
            interactive_max_page: ing_file.interactive_max_page.unwrap_or(20),
            seed_per_page: ing_file.seed_per_page.unwrap_or(200),
            seed_max_page: ing_file.seed_max_page.unwrap_or(5),
        };

        let feed_file = file.feed.unwrap_or_default();
        let feed = FeedSettings {
            page_step: feed_file.page_step.unwrap_or(20),
            low_yield_floor: feed_file.low_yield_floor.unwrap_or(10),
            reveal_latency_ms: feed_file.reveal_latency_ms.unwrap_or(800),
        };

        let gate_file = file.gate.unwrap_or_default();
        let gate = GateSettings {
            countdown_ticks: gate_file.countdown_ticks.unwrap_or(5),
        };

        Ok(Self {
            db_path,
            download_dir,
            ingestion,
            feed,
            gate,
        })
    }
}

/// Settings for the remote content ingestion layer.
#[derive(Debug, Clone)]
pub struct IngestionSettings {
    pub api_key: String,
    pub timeout_sec: u64,
    /// Page size when backfilling an exhausted feed.
    pub interactive_per_page: u32,
    /// Interactive page indices are randomized in 1..=this.
    pub interactive_max_page: u32,
    /// Page size for administrative seeding.
    pub seed_per_page: u32,
    pub seed_max_page: u32,
}

impl Default for IngestionSettings {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            timeout_sec: 30,
            interactive_per_page: 50,
            interactive_max_page: 20,
            seed_per_page: 200,
            seed_max_page: 5,
        }
    }
}

/// Settings for the feed pagination controller.
#[derive(Debug, Clone)]
pub struct FeedSettings {
    /// How many more items a near-bottom signal reveals.
    pub page_step: usize,
    /// Filtered result count below which ingestion backfills immediately.
    pub low_yield_floor: usize,
    /// Artificial latency before revealing already-loaded items.
    pub reveal_latency_ms: u64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            page_step: 20,
            low_yield_floor: 10,
            reveal_latency_ms: 800,
        }
    }
}

/// Settings for the monetization action gate.
#[derive(Debug, Clone)]
pub struct GateSettings {
    /// Ticks of the interstitial countdown before it can be skipped.
    pub countdown_ticks: u32,
}

impl Default for GateSettings {
    fn default() -> Self {
        Self { countdown_ticks: 5 }
    }
}
