//! HTTP archive fetching.
//!
//! Archives are downloaded once into a local directory and reused by file
//! name on later runs. There is no freshness check: the integrity verifier
//! is what guards against a bad cached file.

use reqwest::blocking::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, ShimsError};

/// Fetches release archives over HTTP/HTTPS.
pub struct ArchiveFetcher {
    client: Client,
    dest_dir: PathBuf,
    timeout: Duration,
}

impl ArchiveFetcher {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

    /// Create a fetcher that stores archives in `dest_dir`.
    pub fn new(dest_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::with_timeout(dest_dir, Self::DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with a custom timeout.
    pub fn with_timeout(dest_dir: impl Into<PathBuf>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("venv-shims/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            dest_dir: dest_dir.into(),
            timeout,
        })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Directory archives are stored in.
    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// Where the archive for `url` is (or will be) stored.
    pub fn local_path(&self, url: &str) -> Result<PathBuf> {
        Ok(self.dest_dir.join(archive_filename(url)?))
    }

    /// Return the local archive for `url`, downloading it if absent.
    pub fn fetch(&self, url: &str) -> Result<PathBuf> {
        let path = self.local_path(url)?;
        if path.exists() {
            tracing::debug!("Using existing archive {}", path.display());
            return Ok(path);
        }

        tracing::info!("Downloading {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| download_error(url, e))?;

        if !response.status().is_success() {
            return Err(ShimsError::Download {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        let body = response.bytes().map_err(|e| download_error(url, e))?;
        fs::write(&path, &body)?;
        tracing::debug!("Wrote {} bytes to {}", body.len(), path.display());

        Ok(path)
    }
}

/// Local file name for an archive URL: the last segment of its path.
pub fn archive_filename(url: &str) -> Result<String> {
    let parsed = reqwest::Url::parse(url).map_err(|e| download_error(url, e))?;
    parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .map(String::from)
        .ok_or_else(|| ShimsError::Download {
            url: url.to_string(),
            message: "URL has no file name".to_string(),
        })
}

fn download_error(url: &str, err: impl std::fmt::Display) -> ShimsError {
    ShimsError::Download {
        url: url.to_string(),
        message: err.to_string(),
    }
}
