//! Theme error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised inside the theme system.
///
/// None of these cross the [`ThemeStore`](crate::ThemeStore) boundary: the
/// store logs and absorbs them. They are surfaced directly only by the
/// lower-level pieces (preference store outcomes, config and palette loading).
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Backing store could not be read or written
    #[error("preference storage I/O failed for {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Preference file is not a valid JSON object of strings
    #[error("preference file {path} is malformed: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// In-memory backend rejected the operation
    #[error("preference backend unavailable: {0}")]
    Unavailable(String),

    /// Configuration or palette file could not be parsed
    #[error("failed to parse {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration could not be serialized
    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A color literal that is not `#rgb`, `#rrggbb` or `#rrggbbaa`
    #[error("invalid color literal: {0:?}")]
    InvalidColor(String),

    /// The mirror already has its single writer
    #[error("mode mirror already has an owning theme store")]
    MirrorOwned,
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
