//! Color palettes for each theme mode

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::Color;
use crate::error::{Result, ThemeError};
use crate::mode::ThemeMode;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryLight,
    PrimaryDark,
    Secondary,
    Accent,

    // Surface colors
    BackgroundPrimary,
    BackgroundSecondary,
    Surface,
    SurfaceVariant,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextTertiary,
    TextDisabled,
    TextInverse,

    // Border colors
    Border,
    BorderLight,
    BorderFocus,

    // Status colors
    Success,
    Warning,
    Error,
    Info,

    // Scrims
    Overlay,
    Shadow,
}

impl ColorToken {
    /// Every token, in declaration order
    pub const ALL: [ColorToken; 23] = [
        ColorToken::Primary,
        ColorToken::PrimaryLight,
        ColorToken::PrimaryDark,
        ColorToken::Secondary,
        ColorToken::Accent,
        ColorToken::BackgroundPrimary,
        ColorToken::BackgroundSecondary,
        ColorToken::Surface,
        ColorToken::SurfaceVariant,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
        ColorToken::TextTertiary,
        ColorToken::TextDisabled,
        ColorToken::TextInverse,
        ColorToken::Border,
        ColorToken::BorderLight,
        ColorToken::BorderFocus,
        ColorToken::Success,
        ColorToken::Warning,
        ColorToken::Error,
        ColorToken::Info,
        ColorToken::Overlay,
        ColorToken::Shadow,
    ];

    /// Kebab-case variable name (`background-primary`)
    pub fn variable_name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryLight => "primary-light",
            Self::PrimaryDark => "primary-dark",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::BackgroundPrimary => "background-primary",
            Self::BackgroundSecondary => "background-secondary",
            Self::Surface => "surface",
            Self::SurfaceVariant => "surface-variant",
            Self::TextPrimary => "text-primary",
            Self::TextSecondary => "text-secondary",
            Self::TextTertiary => "text-tertiary",
            Self::TextDisabled => "text-disabled",
            Self::TextInverse => "text-inverse",
            Self::Border => "border",
            Self::BorderLight => "border-light",
            Self::BorderFocus => "border-focus",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
            Self::Overlay => "overlay",
            Self::Shadow => "shadow",
        }
    }
}

/// Complete set of semantic colors for one mode
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorPalette {
    // Brand colors
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,
    pub secondary: Color,
    pub accent: Color,

    // Surface colors
    pub background_primary: Color,
    pub background_secondary: Color,
    pub surface: Color,
    pub surface_variant: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub text_disabled: Color,
    pub text_inverse: Color,

    // Border colors
    pub border: Color,
    pub border_light: Color,
    pub border_focus: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Scrims
    pub overlay: Color,
    pub shadow: Color,
}

impl ColorPalette {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryLight => self.primary_light,
            ColorToken::PrimaryDark => self.primary_dark,
            ColorToken::Secondary => self.secondary,
            ColorToken::Accent => self.accent,
            ColorToken::BackgroundPrimary => self.background_primary,
            ColorToken::BackgroundSecondary => self.background_secondary,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceVariant => self.surface_variant,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextTertiary => self.text_tertiary,
            ColorToken::TextDisabled => self.text_disabled,
            ColorToken::TextInverse => self.text_inverse,
            ColorToken::Border => self.border,
            ColorToken::BorderLight => self.border_light,
            ColorToken::BorderFocus => self.border_focus,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Error => self.error,
            ColorToken::Info => self.info,
            ColorToken::Overlay => self.overlay,
            ColorToken::Shadow => self.shadow,
        }
    }

    /// Light palette shipped with the toolkit
    pub fn light() -> Self {
        Self {
            primary: Color::from_hex(0x6366F1),
            primary_light: Color::from_hex(0x818CF8),
            primary_dark: Color::from_hex(0x4F46E5),
            secondary: Color::from_hex(0x8B5CF6),
            accent: Color::from_hex(0xEC4899),
            background_primary: Color::from_hex(0xFFFFFF),
            background_secondary: Color::from_hex(0xF8FAFC),
            surface: Color::from_hex(0xFFFFFF),
            surface_variant: Color::from_hex(0xF1F5F9),
            text_primary: Color::from_hex(0x0F172A),
            text_secondary: Color::from_hex(0x475569),
            text_tertiary: Color::from_hex(0x94A3B8),
            text_disabled: Color::from_hex(0xCBD5E1),
            text_inverse: Color::WHITE,
            border: Color::from_hex(0xE2E8F0),
            border_light: Color::from_hex(0xF1F5F9),
            border_focus: Color::from_hex(0x6366F1),
            success: Color::from_hex(0x10B981),
            warning: Color::from_hex(0xF59E0B),
            error: Color::from_hex(0xEF4444),
            info: Color::from_hex(0x3B82F6),
            overlay: Color::from_rgba8(0, 0, 0, 128),
            shadow: Color::from_rgba8(0, 0, 0, 26),
        }
    }

    /// Dark palette shipped with the toolkit
    pub fn dark() -> Self {
        Self {
            primary: Color::from_hex(0x818CF8),
            primary_light: Color::from_hex(0xA5B4FC),
            primary_dark: Color::from_hex(0x6366F1),
            secondary: Color::from_hex(0xA78BFA),
            accent: Color::from_hex(0xF472B6),
            background_primary: Color::from_hex(0x0F172A),
            background_secondary: Color::from_hex(0x1E293B),
            surface: Color::from_hex(0x1E293B),
            surface_variant: Color::from_hex(0x334155),
            text_primary: Color::from_hex(0xF8FAFC),
            text_secondary: Color::from_hex(0xCBD5E1),
            text_tertiary: Color::from_hex(0x64748B),
            text_disabled: Color::from_hex(0x475569),
            text_inverse: Color::from_hex(0x0F172A),
            border: Color::from_hex(0x334155),
            border_light: Color::from_hex(0x1E293B),
            border_focus: Color::from_hex(0x818CF8),
            success: Color::from_hex(0x34D399),
            warning: Color::from_hex(0xFBBF24),
            error: Color::from_hex(0xF87171),
            info: Color::from_hex(0x60A5FA),
            overlay: Color::from_rgba8(0, 0, 0, 179),
            shadow: Color::from_rgba8(0, 0, 0, 77),
        }
    }
}

/// Supplies the palette for a mode.
///
/// Must be total over both modes. The factory only reads what it is given.
pub trait PaletteSource: Send + Sync {
    fn palette(&self, mode: ThemeMode) -> ColorPalette;
}

/// The palettes compiled into the crate
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinPalettes;

impl PaletteSource for BuiltinPalettes {
    fn palette(&self, mode: ThemeMode) -> ColorPalette {
        match mode {
            ThemeMode::Light => ColorPalette::light(),
            ThemeMode::Dark => ColorPalette::dark(),
        }
    }
}

/// A light/dark palette pair, typically loaded from a TOML override file
///
/// ```toml
/// [light]
/// primary = "#6366f1"
/// # ... every semantic color is required
///
/// [dark]
/// primary = "#818cf8"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteSet {
    pub light: ColorPalette,
    pub dark: ColorPalette,
}

impl PaletteSet {
    pub fn new(light: ColorPalette, dark: ColorPalette) -> Self {
        Self { light, dark }
    }

    /// Parse a palette pair from TOML source
    pub fn from_toml(src: &str, origin: &Path) -> Result<Self> {
        toml::from_str(src).map_err(|source| ThemeError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a palette pair from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Storage {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }
}

impl Default for PaletteSet {
    fn default() -> Self {
        Self::new(ColorPalette::light(), ColorPalette::dark())
    }
}

impl PaletteSource for PaletteSet {
    fn palette(&self, mode: ThemeMode) -> ColorPalette {
        match mode {
            ThemeMode::Light => self.light.clone(),
            ThemeMode::Dark => self.dark.clone(),
        }
    }
}
