use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the provisioner.
/// Every module returns `Result<T, ProvisionError>`.
#[derive(Debug, Error)]
pub enum ProvisionError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed for {url}: HTTP {status}")]
    DownloadFailed { url: String, status: u16 },

    // ── Metadata ────────────────────────────────────────
    #[error("Minecraft version {0} not found in version manifest")]
    VersionNotFound(String),

    #[error("No server download published for Minecraft {0}")]
    ServerDownloadMissing(String),

    // ── Artifacts ───────────────────────────────────────
    #[error("Failed to download {artifact} from {url}: {source}")]
    Download {
        artifact: String,
        url: String,
        source: Box<ProvisionError>,
    },

    // ── Integrity ───────────────────────────────────────
    #[error("SHA-1 mismatch for {path:?}: expected {expected}, got {actual}")]
    Sha1Mismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    // ── Installer ───────────────────────────────────────
    #[error("Failed to launch Forge installer: {0}")]
    InstallerSpawn(String),

    #[error("Forge installer exited with status {code:?}")]
    InstallerFailed { code: Option<i32> },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type ProvisionResult<T> = Result<T, ProvisionError>;

impl From<std::io::Error> for ProvisionError {
    fn from(source: std::io::Error) -> Self {
        ProvisionError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}
