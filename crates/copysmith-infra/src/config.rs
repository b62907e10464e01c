//! Configuration loader for Copysmith.
//!
//! Reads `config.toml` from the home directory (`~/.copysmith/` by default)
//! and deserializes it into [`CopysmithConfig`]. Falls back to defaults when
//! the file is missing or malformed, then applies environment overrides.

use std::path::{Path, PathBuf};

use copysmith_types::config::CopysmithConfig;

/// Overrides the home directory.
pub const HOME_ENV: &str = "COPYSMITH_HOME";

/// Overrides `server.web_dir`.
pub const WEB_DIR_ENV: &str = "COPYSMITH_WEB_DIR";

/// Resolve the home directory from environment or platform defaults.
///
/// Priority:
/// 1. `COPYSMITH_HOME` environment variable
/// 2. `~/.copysmith`
/// 3. `.copysmith` in the current directory
pub fn resolve_home_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(HOME_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".copysmith");
    }

    PathBuf::from(".copysmith")
}

/// Load configuration from `{home_dir}/config.toml`, then apply environment
/// overrides.
pub async fn load_config(home_dir: &Path) -> CopysmithConfig {
    let mut config = read_config_file(home_dir).await;
    if let Ok(web_dir) = std::env::var(WEB_DIR_ENV) {
        config.server.web_dir = web_dir;
    }
    config
}

/// Read `{home_dir}/config.toml` without environment overrides.
///
/// - Missing file: defaults.
/// - Unreadable or unparseable file: logs a warning, defaults.
pub async fn read_config_file(home_dir: &Path) -> CopysmithConfig {
    let config_path = home_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return CopysmithConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return CopysmithConfig::default();
        }
    };

    match toml::from_str::<CopysmithConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            CopysmithConfig::default()
        }
    }
}
