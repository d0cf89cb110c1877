use anyhow::Result;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

/// Built-in English strings. Keys keep the resource-bundle naming used by the
/// rest of the application so override files stay interchangeable.
static DEFAULT_STRINGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("traymenu.showMainWindow", "Show"),
        ("traymenu.showPreferencesWindow", "Preferences"),
        ("traymenu.lockAllVaults", "Lock All"),
        ("traymenu.quitApplication", "Quit"),
        ("traymenu.vault.unlock", "Unlock"),
        ("traymenu.vault.lock", "Lock"),
        ("traymenu.vault.reveal", "Reveal Drive"),
        ("app.name", "Vault Tray"),
    ])
});

pub struct Localizer {
    overrides: HashMap<String, String>,
}

impl Localizer {
    pub fn with_defaults() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// Loads a flat `{"key": "translation"}` JSON file on top of the built-in
    /// strings. A missing file is not an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::with_defaults());
        }

        let content = std::fs::read_to_string(path)?;
        let overrides: HashMap<String, String> = serde_json::from_str(&content)?;
        log::debug!("Loaded {} string overrides from {:?}", overrides.len(), path);
        Ok(Self { overrides })
    }

    /// Unknown keys resolve to the key itself so a missing translation shows
    /// up in the UI instead of aborting the rebuild.
    pub fn get(&self, key: &str) -> String {
        if let Some(value) = self.overrides.get(key) {
            return value.clone();
        }
        match DEFAULT_STRINGS.get(key) {
            Some(value) => (*value).to_string(),
            None => {
                log::warn!("Missing translation for key: {}", key);
                key.to_string()
            }
        }
    }
}
