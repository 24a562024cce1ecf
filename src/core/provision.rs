// ─── Provisioner ───
// The idempotent fetch-then-install sequence:
//   resolve metadata → ensure layout → fetch artifacts → run installer
// Every step is traversed at most once; any failure ends the run.

use std::path::PathBuf;

use tracing::info;

use crate::core::config::ProvisionConfig;
use crate::core::downloader::Fetcher;
use crate::core::error::{ProvisionError, ProvisionResult};
use crate::core::installer::InstallerRunner;
use crate::core::instance::InstanceLayout;
use crate::core::version::{DownloadArtifact, ReleaseJson, VersionManifest};

/// One downloadable artifact: where it comes from, where it lands.
///
/// `dest` is derived from the configured versions, so the existence check
/// stays stable across runs.
#[derive(Debug, Clone)]
pub struct ArtifactSpec {
    pub name: &'static str,
    pub url: String,
    pub dest: PathBuf,
    pub sha1: Option<String>,
}

/// Drives one provisioning pass to a terminal success or failure.
pub struct Provisioner<F, R> {
    config: ProvisionConfig,
    fetcher: F,
    runner: R,
}

impl<F: Fetcher, R: InstallerRunner> Provisioner<F, R> {
    pub fn new(config: ProvisionConfig, fetcher: F, runner: R) -> Self {
        Self {
            config,
            fetcher,
            runner,
        }
    }

    /// Run the full sequence. Each failure is terminal; re-running after a
    /// partial pass skips artifacts that already completed. A run with all
    /// artifacts present touches the network not at all.
    pub async fn run(&self) -> ProvisionResult<()> {
        let layout = InstanceLayout::new(&self.config.instance_dir);
        let forge_artifacts = self.forge_artifact_specs(&layout);
        let server_dest = layout.artifact_path(&self.server_jar_name());

        // Metadata resolution must precede any download (the server jar
        // location is only known afterwards), but is skipped entirely when
        // nothing is left to fetch.
        let any_missing =
            forge_artifacts.iter().any(|a| !a.dest.exists()) || !server_dest.exists();
        let server = if any_missing {
            Some(self.resolve_server_metadata().await?)
        } else {
            info!("All artifacts already present, skipping metadata resolution.");
            None
        };

        layout.ensure().await?;

        for artifact in &forge_artifacts {
            self.ensure_artifact(artifact).await?;
        }

        match &server {
            Some(meta) => {
                let spec = ArtifactSpec {
                    name: "Minecraft server jar",
                    url: meta.url.clone(),
                    dest: server_dest,
                    sha1: Some(meta.sha1.clone()),
                };
                self.ensure_artifact(&spec).await?;
            }
            None => info!("Minecraft server jar already exists, skipping download."),
        }

        info!("Forge and Minecraft jars present.");
        info!("Running Forge installer to generate libraries and configs...");

        self.runner.run(&forge_artifacts[0].dest, &layout.root).await?;

        info!("Forge server setup complete. Instance folder is ready.");
        Ok(())
    }

    // ── Metadata resolution ─────────────────────────────

    /// Resolve the server jar URL and checksum for the configured release.
    async fn resolve_server_metadata(&self) -> ProvisionResult<DownloadArtifact> {
        let mc = &self.config.minecraft_version;

        let manifest = VersionManifest::fetch(&self.fetcher, &self.config.manifest_url).await?;
        let entry = manifest
            .find_version(mc)
            .ok_or_else(|| ProvisionError::VersionNotFound(mc.clone()))?;

        let release = ReleaseJson::fetch(&self.fetcher, &entry.url).await?;
        let server = release.server_download(mc)?;

        info!("Resolved Minecraft {} server jar (sha1: {})", mc, server.sha1);
        Ok(server.clone())
    }

    // ── Idempotent artifact fetch ───────────────────────

    /// Fetch one artifact unless its local path already exists.
    async fn ensure_artifact(&self, artifact: &ArtifactSpec) -> ProvisionResult<()> {
        if artifact.dest.exists() {
            info!("{} already exists, skipping download.", artifact.name);
            return Ok(());
        }

        info!("Downloading {}...", artifact.name);
        self.fetcher
            .fetch_file(&artifact.url, &artifact.dest, artifact.sha1.as_deref())
            .await
            .map_err(|source| ProvisionError::Download {
                artifact: artifact.name.to_string(),
                url: artifact.url.clone(),
                source: Box::new(source),
            })
    }

    /// The two Forge artifacts, in fetch order. Their Maven URLs are fully
    /// determined by the configured versions.
    fn forge_artifact_specs(&self, layout: &InstanceLayout) -> [ArtifactSpec; 2] {
        let forge_id = self.config.forge_id();
        let installer_name = format!("forge-{}-installer.jar", forge_id);
        let universal_name = format!("forge-{}.jar", forge_id);

        [
            ArtifactSpec {
                name: "Forge installer",
                url: self.forge_maven_url(&forge_id, &installer_name),
                dest: layout.artifact_path(&installer_name),
                sha1: None,
            },
            ArtifactSpec {
                name: "Forge universal jar",
                url: self.forge_maven_url(&forge_id, &universal_name),
                dest: layout.artifact_path(&universal_name),
                sha1: None,
            },
        ]
    }

    fn forge_maven_url(&self, forge_id: &str, file_name: &str) -> String {
        format!(
            "{}/net/minecraftforge/forge/{}/{}",
            self.config.forge_maven, forge_id, file_name
        )
    }

    fn server_jar_name(&self) -> String {
        format!("minecraft-{}.jar", self.config.minecraft_version)
    }
}
