use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::core::error::{ProvisionError, ProvisionResult};

/// Capability to run the external Forge installer. Behind a trait so tests
/// can substitute a fake that records its arguments.
#[async_trait]
pub trait InstallerRunner: Send + Sync {
    /// Run the installer jar with `instance_dir` as working directory.
    /// Returns `Ok(())` only on a zero exit status.
    async fn run(&self, installer_jar: &Path, instance_dir: &Path) -> ProvisionResult<()>;
}

/// Runs `java -jar <installer> --installServer` and waits for it to exit.
/// The child inherits stdout/stderr so installer progress stays visible.
pub struct JavaInstallerRunner {
    java_bin: PathBuf,
}

impl JavaInstallerRunner {
    pub fn new(java_bin: PathBuf) -> Self {
        Self { java_bin }
    }
}

#[async_trait]
impl InstallerRunner for JavaInstallerRunner {
    async fn run(&self, installer_jar: &Path, instance_dir: &Path) -> ProvisionResult<()> {
        info!(
            "Running Forge installer {:?} in {:?}",
            installer_jar, instance_dir
        );

        let status = tokio::process::Command::new(&self.java_bin)
            .arg("-jar")
            .arg(installer_jar)
            .arg("--installServer")
            .current_dir(instance_dir)
            .status()
            .await
            .map_err(|e| ProvisionError::InstallerSpawn(e.to_string()))?;

        if !status.success() {
            return Err(ProvisionError::InstallerFailed {
                code: status.code(),
            });
        }

        Ok(())
    }
}
