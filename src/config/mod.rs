//! Configuration management for Tarjuman

mod keys;

pub use keys::{Action, ActionGroup, KeyBindings, key_to_string};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{
    Catalog, Language, LanguageCatalog, ProviderCatalog, ProviderEntry, builtin_entries,
    builtin_languages,
};
use crate::paths;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "TARJUMAN_CONFIG";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Providers and their models, in display order
    #[serde(default = "builtin_entries")]
    pub providers: Vec<ProviderEntry>,

    /// Languages offered for both sides of the translation
    #[serde(default = "builtin_languages")]
    pub languages: Vec<Language>,

    /// Language code a new form translates from
    #[serde(default = "default_input_language")]
    pub default_input_language: String,

    /// Language code a new form translates to
    #[serde(default = "default_output_language")]
    pub default_output_language: String,

    /// Poll interval in milliseconds for the terminal event loop
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

fn default_input_language() -> String {
    "en".to_string()
}

fn default_output_language() -> String {
    "hi".to_string()
}

const fn default_poll_interval() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            providers: builtin_entries(),
            languages: builtin_languages(),
            default_input_language: default_input_language(),
            default_output_language: default_output_language(),
            poll_interval_ms: default_poll_interval(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default configuration file path
    ///
    /// `TARJUMAN_CONFIG` wins over the platform config directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tarjuman")
            .join("config.json")
    }

    /// Validate the provider and language tables and bundle them.
    ///
    /// # Errors
    ///
    /// Returns an error if either table is invalid or a default language is
    /// not in the language table.
    pub fn catalog(&self) -> Result<Catalog> {
        let providers = ProviderCatalog::new(self.providers.clone())
            .context("Invalid provider table in config")?;
        let languages = LanguageCatalog::new(self.languages.clone())
            .context("Invalid language table in config")?;
        Catalog::new(
            providers,
            languages,
            &self.default_input_language,
            &self.default_output_language,
        )
        .context("Invalid default language in config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.providers.len(), 4);
        assert_eq!(config.default_input_language, "en");
        assert_eq!(config.default_output_language, "hi");
        assert_eq!(config.poll_interval_ms, 100);
    }

    #[test]
    fn test_default_config_builds_builtin_catalog() -> Result<(), Box<dyn std::error::Error>> {
        let catalog = Config::default().catalog()?;
        assert_eq!(catalog, Catalog::builtin());
        Ok(())
    }

    #[test]
    fn test_save_and_load() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");

        let config = Config {
            providers: vec![ProviderEntry::new("Local", &["tiny"])],
            languages: vec![Language::new("de", "German"), Language::new("fr", "French")],
            default_input_language: "de".to_string(),
            default_output_language: "fr".to_string(),
            poll_interval_ms: 250,
            keys: KeyBindings::default(),
        };

        config.save_to(&config_path)?;
        let loaded = Config::load_from(&config_path)?;

        assert_eq!(config, loaded);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_is_error() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.json");

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn test_load_malformed_names_the_file() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json")?;

        let err = Config::load_from(&config_path)
            .err()
            .ok_or("malformed config should not load")?;
        assert!(format!("{err:#}").contains("config.json"));
        Ok(())
    }

    #[test]
    fn test_serde_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let json = r#"{"poll_interval_ms": 50}"#;
        let config: Config = serde_json::from_str(json)?;

        assert_eq!(config.poll_interval_ms, 50);
        assert_eq!(config.providers, builtin_entries());
        assert_eq!(config.languages, builtin_languages());
        assert_eq!(config.default_output_language, "hi");
        Ok(())
    }

    #[test]
    fn test_catalog_rejects_bad_default_language() {
        let config = Config {
            default_output_language: "xx".to_string(),
            ..Config::default()
        };
        let err = config.catalog().err();
        assert!(err.is_some_and(|e| format!("{e:#}").contains("xx")));
    }

    #[test]
    fn test_catalog_rejects_empty_models() {
        let config = Config {
            providers: vec![ProviderEntry::new("Empty", &[])],
            ..Config::default()
        };
        let err = config.catalog().err();
        assert!(err.is_some_and(|e| format!("{e:#}").contains("has no models")));
    }

    #[test]
    fn test_save_creates_parent_dirs() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let nested_path = temp_dir.path().join("deep/nested/dir/config.json");

        let config = Config::default();
        config.save_to(&nested_path)?;

        assert!(nested_path.exists());
        Ok(())
    }

    #[test]
    fn test_default_path_mentions_app() {
        let path = Config::default_path();
        let shown = path.to_string_lossy();
        assert!(shown.contains("tarjuman") || std::env::var_os(CONFIG_ENV).is_some());
    }
}
