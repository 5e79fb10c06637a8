use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub db_path: Option<String>,
    pub download_dir: Option<String>,
    pub api_key: Option<String>,
    pub api_timeout_sec: Option<u64>,

    // Feature configs
    pub ingestion: Option<IngestionConfig>,
    pub feed: Option<FeedConfig>,
    pub gate: Option<GateConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct IngestionConfig {
    pub interactive_per_page: Option<u32>,
    pub interactive_max_page: Option<u32>,
    pub seed_per_page: Option<u32>,
    pub seed_max_page: Option<u32>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct FeedConfig {
    pub page_step: Option<usize>,
    pub low_yield_floor: Option<usize>,
    pub reveal_latency_ms: Option<u64>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct GateConfig {
    pub countdown_ticks: Option<u32>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
