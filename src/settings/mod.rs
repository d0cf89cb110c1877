pub mod autostart;
pub mod keychain;

use crate::paths;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UiTheme {
    Light,
    Dark,
    #[default]
    Automatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UiOrientation {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// A vault known to the application; seeds the collection at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultSettings {
    pub id: String,
    pub display_name: String,
    pub path: PathBuf,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub theme: UiTheme,
    #[serde(default)]
    pub show_minimize_button: bool,
    #[serde(default = "default_true")]
    pub show_tray_icon: bool,
    #[serde(default)]
    pub start_hidden: bool,
    #[serde(default)]
    pub debug_mode: bool,
    /// BCP 47 language tag; `None` follows the OS locale.
    #[serde(default)]
    pub language: Option<String>,
    /// Stable id of the selected keychain provider, see [`keychain`].
    #[serde(default)]
    pub keychain_provider: Option<String>,
    #[serde(default)]
    pub orientation: UiOrientation,
    #[serde(default)]
    pub vaults: Vec<VaultSettings>,
}

/// Loads and persists [`Settings`] as pretty JSON under the user config dir.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: paths::settings_path()?,
        })
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!("No settings file at {:?}, using defaults", self.path);
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Loads, mutates and saves in one step.
    pub fn update(&self, mutate: impl FnOnce(&mut Settings)) -> Result<Settings> {
        let mut settings = self.load()?;
        mutate(&mut settings);
        self.save(&settings)?;
        Ok(settings)
    }
}
