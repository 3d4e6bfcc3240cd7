//! Color type and hex conversions

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::error::ThemeError;

/// RGBA color with f32 components (0.0 to 1.0)
///
/// Serializes as a lowercase hex string so palette files stay readable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            Self::from_rgba8(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            Self::from_rgba8(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
                255,
            )
        }
    }

    /// Parse a `#rgb`, `#rrggbb` or `#rrggbbaa` literal (the `#` is optional)
    pub fn parse_hex(literal: &str) -> Option<Self> {
        let digits = literal.trim().strip_prefix('#').unwrap_or(literal.trim());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match digits.len() {
            3 => {
                // #rgb expands each nibble: #2a4 == #22aa44
                let value = u32::from_str_radix(digits, 16).ok()?;
                let expand = |n: u32| ((n & 0xF) * 0x11) as u8;
                Some(Self::from_rgba8(
                    expand(value >> 8),
                    expand(value >> 4),
                    expand(value),
                    255,
                ))
            }
            6 => u32::from_str_radix(digits, 16).ok().map(Self::from_hex),
            8 => {
                let value = u32::from_str_radix(digits, 16).ok()?;
                Some(Self::from_rgba8(
                    (value >> 24) as u8,
                    (value >> 16) as u8,
                    (value >> 8) as u8,
                    value as u8,
                ))
            }
            _ => None,
        }
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    /// Lowercase hex literal; the alpha byte is only emitted when translucent
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    /// True when every channel is a finite value within 0.0..=1.0
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse_hex(&value).ok_or(ThemeError::InvalidColor(value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hex_expands() {
        let c = Color::parse_hex("#222").unwrap();
        assert_eq!(c, Color::from_hex(0x222222));
        assert_eq!(c.to_hex(), "#222222");
    }

    #[test]
    fn test_translucent_hex_keeps_alpha() {
        let c = Color::parse_hex("#1e66f580").unwrap();
        assert_eq!(c.to_rgba8(), [0x1e, 0x66, 0xf5, 0x80]);
        assert_eq!(c.to_hex(), "#1e66f580");
    }

    #[test]
    fn test_rejects_garbage() {
        for bad in ["", "#", "#12", "#12345", "purple", "#ggg", "#1234567"] {
            assert!(Color::parse_hex(bad).is_none(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Color::WHITE.with_alpha(2.0).a, 1.0);
        assert_eq!(Color::WHITE.with_alpha(0.25).a, 0.25);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::from_hex(0x3584E4)).unwrap();
        assert_eq!(json, "\"#3584e4\"");
        let err = serde_json::from_str::<Color>("\"blue\"");
        assert!(err.is_err());
    }
}
