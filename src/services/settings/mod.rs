//! Application settings persisted as TOML in the platform config
//! directory.
//!
//! A missing file yields the defaults; a missing field falls back to
//! its individual default so old config files keep loading after new
//! fields are added.

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the document store, e.g. `http://localhost:3000/api`.
    pub api_base_url: String,
    /// Per-request timeout handed to the HTTP client.
    pub request_timeout_secs: u64,
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday.
    pub first_day_of_week: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000/api".to_string(),
            request_timeout_secs: 20,
            first_day_of_week: 0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(anyhow!("api_base_url cannot be empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(anyhow!("request_timeout_secs must be at least 1"));
        }
        if self.first_day_of_week > 6 {
            return Err(anyhow!(
                "first_day_of_week must be 0-6, got {}",
                self.first_day_of_week
            ));
        }
        Ok(())
    }

    /// Load settings from `path`, falling back to defaults when the
    /// file does not exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        Ok(())
    }

    /// Default settings file location for this platform.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "Ken24T", "WeekPlanner")
            .ok_or_else(|| anyhow!("Could not determine a config directory"))?;
        Ok(dirs.config_dir().join(SETTINGS_FILE))
    }
}
