use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use forge_provisioner::core::downloader::HttpFetcher;
use forge_provisioner::core::http::build_http_client;
use forge_provisioner::core::installer::JavaInstallerRunner;
use forge_provisioner::{ProvisionConfig, ProvisionResult, Provisioner};

/// Provision a local Minecraft Forge server instance.
#[derive(Debug, Parser)]
#[command(name = "forge-provisioner", version)]
struct Args {
    /// Target Minecraft release.
    #[arg(long, default_value = "1.16.5")]
    minecraft_version: String,

    /// Forge build matching the Minecraft release.
    #[arg(long, default_value = "36.2.39")]
    forge_version: String,

    /// Instance root directory.
    #[arg(long, default_value = "instances/main")]
    instance_dir: PathBuf,

    /// Java executable used to run the Forge installer.
    #[arg(long, default_value = "java")]
    java_bin: PathBuf,
}

impl Args {
    fn into_config(self) -> ProvisionConfig {
        ProvisionConfig {
            minecraft_version: self.minecraft_version,
            forge_version: self.forge_version,
            instance_dir: self.instance_dir,
            java_bin: self.java_bin,
            ..ProvisionConfig::default()
        }
    }
}

async fn run(config: ProvisionConfig) -> ProvisionResult<()> {
    let client = build_http_client()?;
    let fetcher = HttpFetcher::new(client);
    let runner = JavaInstallerRunner::new(config.java_bin.clone());

    Provisioner::new(config, fetcher, runner).run().await
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,forge_provisioner=debug")),
        )
        .init();

    let config = Args::parse().into_config();
    tracing::info!(
        "Provisioning Forge {} server instance at {:?}",
        config.forge_id(),
        config.instance_dir
    );

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
