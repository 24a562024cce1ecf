use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::error::{ProvisionError, ProvisionResult};

/// Directory structure of one server instance on disk.
///
/// - `<root>/mods/`      — mod JARs
/// - `<root>/libraries/` — runtime libraries written by the installer
/// - `<root>/assets/`    — game assets
///
/// Directories are created once and never removed by the provisioner.
#[derive(Debug, Clone)]
pub struct InstanceLayout {
    pub root: PathBuf,
    pub mods_dir: PathBuf,
    pub libraries_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl InstanceLayout {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            mods_dir: root.join("mods"),
            libraries_dir: root.join("libraries"),
            assets_dir: root.join("assets"),
        }
    }

    /// Create the directory structure; a no-op when it already exists.
    pub async fn ensure(&self) -> ProvisionResult<()> {
        for dir in [&self.root, &self.mods_dir, &self.libraries_dir, &self.assets_dir] {
            create_dir_safe(dir).await?;
        }

        info!("Instance layout ready at {:?}", self.root);
        Ok(())
    }

    /// Path of an artifact file inside the instance root.
    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }
}

async fn create_dir_safe(path: &Path) -> ProvisionResult<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| ProvisionError::Io {
            path: path.to_path_buf(),
            source,
        })
}
