//! Theme configuration file handling (lumen.toml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ThemeError};
use crate::factory::TokenFactory;
use crate::mode::ThemeMode;
use crate::storage::{FileBackend, PreferenceStore, DEFAULT_PREFERENCE_KEY};
use crate::tokens::{BuiltinPalettes, PaletteSet};
use crate::validate::normalize_mode;

/// Name of the configuration file looked up by [`ThemeConfig::load_from_dir`]
pub const CONFIG_FILE: &str = "lumen.toml";

/// Top-level theme configuration
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub theme: ThemeSection,
    /// Directory relative paths are resolved against
    #[serde(skip)]
    root: PathBuf,
}

/// Where the preference is persisted
#[derive(Debug, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Preference file (relative to the config directory)
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
    /// Key the mode is stored under
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".lumen/preferences.json")
}

fn default_key() -> String {
    DEFAULT_PREFERENCE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            key: default_key(),
        }
    }
}

/// Theme defaults and palette overrides
#[derive(Debug, Deserialize, Serialize)]
pub struct ThemeSection {
    /// Mode used until a persisted preference is found. Free-form.
    #[serde(default = "default_mode_name")]
    pub default_mode: String,
    /// Optional `[light]`/`[dark]` palette file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palettes: Option<PathBuf>,
}

fn default_mode_name() -> String {
    ThemeMode::Light.as_str().to_string()
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            default_mode: default_mode_name(),
            palettes: None,
        }
    }
}

impl ThemeConfig {
    /// Load configuration from a directory (looks for lumen.toml).
    ///
    /// A missing file yields the defaults rooted at `path`.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let (config_path, root) = if path.is_file() {
            let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
            (path.to_path_buf(), root)
        } else {
            (path.join(CONFIG_FILE), path.to_path_buf())
        };

        if !config_path.exists() {
            tracing::debug!("ThemeConfig: no {} in {}, using defaults", CONFIG_FILE, root.display());
            return Ok(Self::default().rooted_at(root));
        }

        let content = fs::read_to_string(&config_path).map_err(|source| ThemeError::Storage {
            path: config_path.clone(),
            source,
        })?;

        Ok(Self::from_toml(&content, &config_path)?.rooted_at(root))
    }

    /// Parse configuration from TOML source
    pub fn from_toml(src: &str, origin: &Path) -> Result<Self> {
        toml::from_str(src).map_err(|source| ThemeError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Resolve relative paths against `root`
    pub fn rooted_at(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Configured default mode; unrecognized input means `light`
    pub fn default_mode(&self) -> ThemeMode {
        let mode = normalize_mode(Some(&self.theme.default_mode), ThemeMode::Light);
        if mode.as_str() != self.theme.default_mode {
            tracing::warn!(
                "ThemeConfig: unrecognized default_mode {:?}, using {}",
                self.theme.default_mode,
                mode
            );
        }
        mode
    }

    pub fn preference_path(&self) -> PathBuf {
        self.root.join(&self.storage.path)
    }

    /// Preference store over the configured file and key
    pub fn preference_store(&self) -> PreferenceStore<FileBackend> {
        PreferenceStore::with_key(FileBackend::new(self.preference_path()), &self.storage.key)
    }

    /// The palette override, if one is configured
    pub fn palettes(&self) -> Result<Option<PaletteSet>> {
        self.theme
            .palettes
            .as_ref()
            .map(|file| PaletteSet::load(&self.root.join(file)))
            .transpose()
    }

    /// Token factory over the configured palettes
    pub fn token_factory(&self) -> Result<TokenFactory> {
        Ok(match self.palettes()? {
            Some(set) => TokenFactory::new(set),
            None => TokenFactory::new(BuiltinPalettes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::ColorPalette;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ThemeConfig::load_from_dir(dir.path()).unwrap();

        assert_eq!(config.storage.key, "@theme_mode");
        assert_eq!(config.default_mode(), ThemeMode::Light);
        assert_eq!(
            config.preference_path(),
            dir.path().join(".lumen/preferences.json")
        );
        assert!(config.palettes().unwrap().is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = ThemeConfig::from_toml(
            "[theme]\ndefault_mode = \"dark\"\n",
            Path::new("lumen.toml"),
        )
        .unwrap();

        assert_eq!(config.default_mode(), ThemeMode::Dark);
        assert_eq!(config.storage.path, PathBuf::from(".lumen/preferences.json"));
    }

    #[test]
    fn test_unrecognized_default_mode_is_light() {
        let config = ThemeConfig::from_toml(
            "[theme]\ndefault_mode = \"Dark\"\n",
            Path::new("lumen.toml"),
        )
        .unwrap();
        assert_eq!(config.default_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = ThemeConfig::from_toml("[storage\n", Path::new("lumen.toml")).unwrap_err();
        assert!(matches!(err, ThemeError::Config { .. }));
    }

    #[test]
    fn test_loads_palette_override() {
        let dir = tempfile::tempdir().unwrap();
        let mut dark = ColorPalette::dark();
        dark.border = crate::color::Color::parse_hex("#222222").unwrap();
        let set = PaletteSet::new(ColorPalette::light(), dark);
        fs::write(dir.path().join("palettes.toml"), toml::to_string(&set).unwrap()).unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[storage]\nkey = \"app.theme\"\n\n[theme]\npalettes = \"palettes.toml\"\n",
        )
        .unwrap();

        let config = ThemeConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.storage.key, "app.theme");
        assert_eq!(config.preference_store().key(), "app.theme");
        assert_eq!(config.palettes().unwrap(), Some(set));

        let tokens = config.token_factory().unwrap().derive(ThemeMode::Dark);
        assert_eq!(tokens.borders.card.color.to_hex(), "#222222");
    }

    #[test]
    fn test_to_toml_round_trips() {
        let config = ThemeConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = ThemeConfig::from_toml(&text, Path::new("lumen.toml")).unwrap();
        assert_eq!(parsed.storage.key, config.storage.key);
        assert_eq!(parsed.theme.default_mode, "light");
    }
}
