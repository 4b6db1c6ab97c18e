//! Loads the vault configuration from `<vault dir>/config.toml`.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use url::Url;

pub const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:5173/";
pub const DEFAULT_SLOT_NAME: &str = "promptvault_items";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct VaultConfig {
    /// Origin and path that share links are built on.
    pub share_base_url: String,
    /// Name of the slot file, without extension.
    pub slot_name: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            slot_name: DEFAULT_SLOT_NAME.to_string(),
        }
    }
}

impl VaultConfig {
    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config.toml: {}", e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        let config: VaultConfig =
            toml::from_str(content).map_err(|e| format!("Failed to parse config.toml: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        Url::parse(&self.share_base_url)
            .map_err(|e| format!("Invalid share_base_url '{}': {}", self.share_base_url, e))?;
        let name = self.slot_name.trim();
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(format!("Invalid slot_name '{}'", self.slot_name));
        }
        Ok(())
    }

    pub fn slot_file_name(&self) -> String {
        format!("{}.json", self.slot_name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = VaultConfig::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, VaultConfig::default());
        assert_eq!(config.slot_file_name(), "promptvault_items.json");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = VaultConfig::parse(r#"share_base_url = "https://vault.example.com/app""#).unwrap();
        assert_eq!(config.share_base_url, "https://vault.example.com/app");
        assert_eq!(config.slot_name, DEFAULT_SLOT_NAME);
    }

    #[test]
    fn rejects_bad_url() {
        let err = VaultConfig::parse(r#"share_base_url = "not a url""#).unwrap_err();
        assert!(err.contains("Invalid share_base_url"));
    }

    #[test]
    fn rejects_slot_name_with_separator() {
        assert!(VaultConfig::parse(r#"slot_name = "../items""#).is_err());
    }

    #[test]
    fn rejects_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "share_base_url = ").unwrap();
        let err = VaultConfig::load(&path).unwrap_err();
        assert!(err.starts_with("Failed to parse config.toml"));
    }
}
