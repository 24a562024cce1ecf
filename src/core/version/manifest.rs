// ─── Version Manifest ───
// Handles fetching and parsing the Mojang version manifest.

use serde::Deserialize;
use tracing::info;

use crate::core::downloader::Fetcher;
use crate::core::error::ProvisionResult;

/// Top-level Mojang version manifest.
#[derive(Debug, Deserialize)]
pub struct VersionManifest {
    pub versions: Vec<VersionEntry>,
}

/// A single entry in the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub version_type: String,
    pub url: String,
}

impl VersionManifest {
    /// Fetch the version manifest through the fetch capability.
    pub async fn fetch<F: Fetcher + ?Sized>(fetcher: &F, url: &str) -> ProvisionResult<Self> {
        info!("Fetching Minecraft version manifest...");

        let bytes = fetcher.fetch_bytes(url).await?;
        let manifest: VersionManifest = serde_json::from_slice(&bytes)?;

        info!("Loaded {} versions from manifest", manifest.versions.len());
        Ok(manifest)
    }

    /// Find a specific version entry by ID (e.g. "1.16.5").
    pub fn find_version(&self, id: &str) -> Option<&VersionEntry> {
        self.versions.iter().find(|v| v.id == id)
    }
}
