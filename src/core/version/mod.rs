mod manifest;
mod release;

pub use manifest::{VersionEntry, VersionManifest};
pub use release::{DownloadArtifact, ReleaseJson};
