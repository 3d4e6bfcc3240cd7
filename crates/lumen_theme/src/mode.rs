//! Theme mode selector

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The two-valued selector driving all derived presentation state
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Both modes, light first
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// Stable identifier used for persistence and config
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Strict parse: only the exact strings `"light"` and `"dark"` are accepted
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite mode
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for [`ThemeMode::from_str`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl Display for UnknownMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown theme mode {:?} (expected \"light\" or \"dark\")", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for ThemeMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("Dark"), None);
        assert_eq!(ThemeMode::parse(" dark"), None);
        assert_eq!(ThemeMode::parse(""), None);
    }

    #[test]
    fn test_toggle_flips() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }

    #[test]
    fn test_from_str_reports_input() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        let err = "sepia".parse::<ThemeMode>().unwrap_err();
        assert_eq!(err, UnknownMode("sepia".to_string()));
        assert!(err.to_string().contains("\"sepia\""));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let back: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(back, ThemeMode::Light);
    }
}
