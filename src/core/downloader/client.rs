use std::path::Path;

use async_trait::async_trait;
use reqwest::Client;
use sha1::{Digest, Sha1};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::core::error::{ProvisionError, ProvisionResult};

/// Capability to retrieve remote bytes, either into memory (metadata
/// documents) or onto disk (artifacts). The provisioner only talks to the
/// network through this trait, so tests can substitute a fixture fetcher.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` into memory.
    async fn fetch_bytes(&self, url: &str) -> ProvisionResult<Vec<u8>>;

    /// Fetch `url` to `dest`, optionally validating SHA-1.
    async fn fetch_file(
        &self,
        url: &str,
        dest: &Path,
        sha1_expected: Option<&str>,
    ) -> ProvisionResult<()>;
}

/// SHA-1 validated HTTP fetcher backed by a shared `reqwest::Client`.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn get_checked(&self, url: &str) -> ProvisionResult<Vec<u8>> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProvisionError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_bytes(&self, url: &str) -> ProvisionResult<Vec<u8>> {
        self.get_checked(url).await
    }

    /// Download a single file to `dest`, optionally validating SHA-1.
    ///
    /// The full body is buffered and validated before the destination is
    /// written, so an existing local path always holds complete content;
    /// a failed write removes the destination.
    async fn fetch_file(
        &self,
        url: &str,
        dest: &Path,
        sha1_expected: Option<&str>,
    ) -> ProvisionResult<()> {
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ProvisionError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let bytes = self.get_checked(url).await?;
        store_validated(dest, &bytes, sha1_expected).await?;

        debug!("Downloaded: {} -> {:?}", url, dest);
        Ok(())
    }
}

/// Validate SHA-1 on the in-memory buffer, then write `dest`. The
/// destination is only ever created from complete, validated content; a
/// failed write removes it again.
async fn store_validated(
    dest: &Path,
    bytes: &[u8],
    sha1_expected: Option<&str>,
) -> ProvisionResult<()> {
    if let Some(expected) = sha1_expected {
        let mut hasher = Sha1::new();
        hasher.update(bytes);
        let actual = hex::encode(hasher.finalize());
        if actual != expected {
            return Err(ProvisionError::Sha1Mismatch {
                path: dest.to_path_buf(),
                expected: expected.to_string(),
                actual,
            });
        }
    }

    if let Err(e) = write_all(dest, bytes).await {
        let _ = tokio::fs::remove_file(dest).await;
        return Err(e);
    }

    Ok(())
}

// Write inside a block to ensure the handle is dropped immediately —
// critical on Windows.
async fn write_all(dest: &Path, bytes: &[u8]) -> ProvisionResult<()> {
    let io_err = |e| ProvisionError::Io {
        path: dest.to_path_buf(),
        source: e,
    };

    {
        let mut file = tokio::fs::File::create(dest).await.map_err(io_err)?;
        file.write_all(bytes).await.map_err(io_err)?;
        file.flush().await.map_err(io_err)?;
    }

    Ok(())
}
