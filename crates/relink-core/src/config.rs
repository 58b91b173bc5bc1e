use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// HTTP client settings for the discovery GETs (`~/.config/relink/config.toml`).
///
/// Every field is optional in the file. The defaults match what a platform
/// HTTP client does out of the box: follow redirects, generous timeouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Connect timeout in seconds (0 = libcurl default).
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds (0 = none).
    pub timeout_secs: u64,
    /// Follow `Location` on 3xx responses.
    pub follow_redirects: bool,
    /// Redirect hop limit when following.
    pub max_redirections: u32,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 60,
            follow_redirects: true,
            max_redirections: 10,
        }
    }
}

/// Existing config file under the XDG config dirs, if any.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("relink")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from the XDG config file, or defaults when there is none.
/// Nothing is written to disk.
pub fn load_or_default() -> Result<DiscoveryConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(DiscoveryConfig::default())
        }
    }
}

/// Load configuration from an explicit TOML file.
pub fn load_from(path: &Path) -> Result<DiscoveryConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: DiscoveryConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::info!("loaded config from {}", path.display());
    Ok(cfg)
}
