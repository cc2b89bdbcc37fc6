use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, StatementError};

pub const DEFAULT_ACCOUNT_NAME: &str = "Rajhi_Ghadeer";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_account_name")]
    pub account_name: String,
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

fn default_account_name() -> String {
    DEFAULT_ACCOUNT_NAME.to_string()
}

fn default_pretty_json() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            account_name: default_account_name(),
            pretty_json: default_pretty_json(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("stmtnorm")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Settings stored at `path`. A missing file means defaults; an unreadable or
/// malformed one also falls back to defaults, with a warning.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read settings; using defaults");
            return Settings::default();
        }
    };
    match serde_json::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed settings file; using defaults");
            Settings::default()
        }
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    if settings.account_name.trim().is_empty() {
        return Err(StatementError::Settings("account name cannot be empty".into()));
    }
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| StatementError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

/// Account label for a run: the command-line value if given, else the configured one.
pub fn resolve_account_name(cli_value: Option<&str>, settings: &Settings) -> String {
    match cli_value.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => settings.account_name.clone(),
    }
}
