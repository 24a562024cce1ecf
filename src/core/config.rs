use std::path::PathBuf;

pub const VERSION_MANIFEST_URL: &str =
    "https://launchermeta.mojang.com/mc/game/version_manifest.json";

pub const FORGE_MAVEN: &str = "https://maven.minecraftforge.net";

/// Immutable configuration for one provisioning run.
///
/// All version- and path-dependent behavior flows from this struct, so
/// tests can substitute alternate versions, directories, and endpoints
/// without touching process-wide state.
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    /// Target Minecraft release, e.g. "1.16.5".
    pub minecraft_version: String,
    /// Forge build matching the Minecraft release, e.g. "36.2.39".
    pub forge_version: String,
    /// Instance root; artifacts and subdirectories live underneath.
    pub instance_dir: PathBuf,
    /// Java executable used to run the Forge installer.
    pub java_bin: PathBuf,
    /// Mojang version manifest endpoint.
    pub manifest_url: String,
    /// Forge Maven repository base URL.
    pub forge_maven: String,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            minecraft_version: "1.16.5".to_string(),
            forge_version: "36.2.39".to_string(),
            instance_dir: PathBuf::from("instances/main"),
            java_bin: PathBuf::from("java"),
            manifest_url: VERSION_MANIFEST_URL.to_string(),
            forge_maven: FORGE_MAVEN.to_string(),
        }
    }
}

impl ProvisionConfig {
    /// Combined Forge identifier, e.g. "1.16.5-36.2.39".
    pub fn forge_id(&self) -> String {
        format!("{}-{}", self.minecraft_version, self.forge_version)
    }
}
