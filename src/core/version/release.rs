// ─── Release JSON ───
// Per-release metadata document referenced by a manifest entry. Only the
// server download block is needed here.

use serde::Deserialize;

use crate::core::downloader::Fetcher;
use crate::core::error::{ProvisionError, ProvisionResult};

/// Subset of a Mojang per-release JSON.
#[derive(Debug, Deserialize)]
pub struct ReleaseJson {
    pub downloads: ReleaseDownloads,
}

#[derive(Debug, Deserialize)]
pub struct ReleaseDownloads {
    pub server: Option<DownloadArtifact>,
}

/// A downloadable file with integrity metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadArtifact {
    pub sha1: String,
    pub size: u64,
    pub url: String,
}

impl ReleaseJson {
    /// Fetch and parse the release JSON at `url`.
    pub async fn fetch<F: Fetcher + ?Sized>(fetcher: &F, url: &str) -> ProvisionResult<Self> {
        let bytes = fetcher.fetch_bytes(url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// The server jar download, or an error when the release ships none.
    pub fn server_download(&self, version_id: &str) -> ProvisionResult<&DownloadArtifact> {
        self.downloads
            .server
            .as_ref()
            .ok_or_else(|| ProvisionError::ServerDownloadMissing(version_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_server_download() {
        let json = r#"{
            "downloads": {
                "client": {"sha1": "aaa", "size": 1, "url": "https://example.com/client.jar"},
                "server": {"sha1": "1b557e7b033b583cd9f66746b7a9ab1ec1673ced",
                           "size": 37962360,
                           "url": "https://example.com/server.jar"}
            }
        }"#;
        let release: ReleaseJson = serde_json::from_str(json).unwrap();
        let server = release.server_download("1.16.5").unwrap();
        assert_eq!(server.sha1, "1b557e7b033b583cd9f66746b7a9ab1ec1673ced");
        assert_eq!(server.url, "https://example.com/server.jar");
    }

    #[test]
    fn missing_server_download_is_an_error() {
        let release: ReleaseJson =
            serde_json::from_str(r#"{"downloads": {}}"#).unwrap();
        assert!(matches!(
            release.server_download("1.16.5"),
            Err(ProvisionError::ServerDownloadMissing(v)) if v == "1.16.5"
        ));
    }
}
