use std::path::Path;

use tracing::info;

use govchain_common::Result;

use crate::config::NodeConfig;

/// Loads the config at `path`, writing the default one first if the file
/// does not exist yet.
pub fn ensure_config(path: &Path) -> Result<NodeConfig> {
    if !path.exists() {
        info!("⚠️ Config not found. Writing default to {}", path.display());
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        NodeConfig::default().save_to_file(path)?;
    }
    NodeConfig::load_from_file(path)
}
