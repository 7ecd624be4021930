pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use schema::{ApiConfig, AppConfig};

pub const ENV_API_URL: &str = "CROPDESK_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "CROPDESK_TIMEOUT_SECS";
pub const ENV_START_PANEL: &str = "CROPDESK_START_PANEL";

pub fn load() -> AppConfig {
    let mut config = AppConfig::default();

    for path in [global_config_path(), project_config_path()]
        .into_iter()
        .flatten()
    {
        if !path.exists() {
            continue;
        }
        match load_toml_file(&path) {
            // Files deserialize over defaults, so a later layer replaces the
            // earlier one wholesale.
            Ok(layer) => {
                log::info!("Loaded config from {}", path.display());
                config = layer;
            }
            Err(err) => log::warn!("Ignoring config file: {err:#}"),
        }
    }

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    config
}

fn load_toml_file(path: &Path) -> Result<AppConfig> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

fn apply_env_overrides(config: &mut AppConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(url) = var(ENV_API_URL).filter(|value| !value.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }

    if let Some(raw) = var(ENV_TIMEOUT_SECS) {
        match raw.trim().parse::<u64>() {
            Ok(secs) => config.api.timeout_secs = secs,
            Err(err) => log::warn!("Ignoring {ENV_TIMEOUT_SECS}={raw:?}: {err}"),
        }
    }

    if let Some(panel) = var(ENV_START_PANEL) {
        config.ui.start_panel = panel;
    }
}

fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".cropdesk").join("config.toml"))
}

fn project_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|cwd| cwd.join("cropdesk.toml"))
}
