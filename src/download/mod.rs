//! Forced download executor.
//!
//! Guarantees a save-to-device outcome for a remote or local asset. The
//! primary strategy retrieves the source as a credential-less binary payload
//! and materializes it through a transient local file before the final save;
//! cross-origin hosts that reject the retrieval fall back to a direct
//! save-as against the original reference. The executor never raises past
//! its own boundary: the caller gets a plain success flag.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;
use tracing::{debug, error, warn};

use crate::store::MediaKind;

/// Derives the on-disk filename for a pin download: non-alphanumerics become
/// underscores, lowercased, with the extension following the media kind.
pub fn download_filename(title: &str, kind: MediaKind) -> String {
    let sanitized: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let stem = if sanitized.is_empty() {
        "download".to_string()
    } else {
        sanitized
    };
    format!("Interest_HD_{}.{}", stem, kind.file_extension())
}

/// Final save-as boundary. The primary path hands over bytes; the fallback
/// hands over the original reference when the bytes could not be retrieved.
pub trait SaveSink: Send + Sync {
    fn save_bytes(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf>;

    fn save_reference(&self, filename: &str, url: &str) -> Result<PathBuf>;
}

/// Sink that lands downloads in a directory on the local disk.
pub struct DiskSaveSink {
    dir: PathBuf,
}

impl DiskSaveSink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl SaveSink for DiskSaveSink {
    fn save_bytes(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).context("Failed to create download directory")?;

        // Materialize through a transient file; it is released automatically
        // if the final persist never happens.
        let mut temp =
            NamedTempFile::new_in(&self.dir).context("Failed to create transient file")?;
        temp.write_all(bytes).context("Failed to write payload")?;

        let target = self.dir.join(filename);
        temp.persist(&target)
            .context("Failed to persist download")?;
        Ok(target)
    }

    fn save_reference(&self, filename: &str, url: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).context("Failed to create download directory")?;

        // Whether the reference forces a download is up to the origin; all
        // we can guarantee locally is a shortcut the environment can open.
        let target = self.dir.join(format!("{}.url", filename));
        fs::write(&target, format!("[InternetShortcut]\r\nURL={}\r\n", url))
            .context("Failed to write reference shortcut")?;
        Ok(target)
    }
}

pub struct ForcedDownloader {
    client: reqwest::Client,
    sink: Arc<dyn SaveSink>,
}

impl ForcedDownloader {
    pub fn new(timeout_sec: u64, sink: Arc<dyn SaveSink>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()?;
        Ok(Self { client, sink })
    }

    /// Downloads `url` under `filename`. Tries the binary-payload path
    /// first and falls back to a direct reference save on any failure.
    /// Returns whether a save action was ultimately triggered.
    pub async fn download(&self, url: &str, filename: &str) -> bool {
        match self.fetch_bytes(url).await {
            Ok(bytes) => match self.sink.save_bytes(filename, &bytes) {
                Ok(path) => {
                    debug!("Saved {} byte(s) to {:?}", bytes.len(), path);
                    return true;
                }
                Err(err) => {
                    warn!("Failed to materialize payload for {}: {:#}", filename, err);
                }
            },
            Err(err) => {
                warn!(
                    "Direct payload download failed for {}, falling back to reference save: {:#}",
                    url, err
                );
            }
        }

        match self.sink.save_reference(filename, url) {
            Ok(path) => {
                debug!("Saved reference for {} to {:?}", url, path);
                true
            }
            Err(err) => {
                error!("All download attempts failed for {}: {:#}", url, err);
                false
            }
        }
    }

    /// Credential-less retrieval of the source as bytes.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to connect for download")?;

        if !response.status().is_success() {
            bail!("Download failed with status: {}", response.status());
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read response body")?;
        Ok(bytes.to_vec())
    }
}
