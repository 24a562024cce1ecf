// ─── Forge Provisioner Core ───
// One linear provisioning pass: resolve metadata, ensure the instance
// layout, fetch missing artifacts, run the Forge installer.
//
// Architecture:
//   core/
//     config.rs   — Immutable run configuration
//     version/    — Mojang manifest + per-release server download
//     instance/   — InstanceLayout directory structure
//     downloader/ — Fetcher seam + SHA-1 validated HTTP fetcher
//     installer   — InstallerRunner seam + java subprocess
//     provision   — Provisioner sequence

pub mod config;
pub mod downloader;
pub mod error;
pub mod http;
pub mod installer;
pub mod instance;
pub mod provision;
pub mod version;
