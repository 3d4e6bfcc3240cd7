//! Token set validation and mode sanitization
//!
//! Every section of [`DesignTokens`] is present by construction, so
//! completeness here means every section is *usable*: colors in range,
//! metrics finite, and the injected border colors still matching the
//! palette. A set that fails is treated as a defective derivation.

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::factory::DesignTokens;
use crate::mode::ThemeMode;
use crate::tokens::ColorToken;

/// Top-level sections of a derived token set
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TokenSection {
    Colors,
    Spacing,
    Typography,
    IconSizes,
    Opacity,
    AvatarSizes,
    Borders,
}

impl Display for TokenSection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Colors => "colors",
            Self::Spacing => "spacing",
            Self::Typography => "typography",
            Self::IconSizes => "iconSizes",
            Self::Opacity => "opacity",
            Self::AvatarSizes => "avatarSizes",
            Self::Borders => "borders",
        })
    }
}

/// First defect found in a token set
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{section} section is incomplete: {detail}")]
pub struct TokenDefect {
    pub section: TokenSection,
    pub detail: String,
}

impl TokenDefect {
    fn new(section: TokenSection, detail: impl Into<String>) -> Self {
        Self {
            section,
            detail: detail.into(),
        }
    }
}

fn non_negative(values: &[f32]) -> bool {
    values.iter().all(|v| v.is_finite() && *v >= 0.0)
}

fn positive(values: &[f32]) -> bool {
    values.iter().all(|v| v.is_finite() && *v > 0.0)
}

/// Check every section of `tokens`, reporting the first defect
pub fn validate(tokens: &DesignTokens) -> Result<(), TokenDefect> {
    if let Some(token) = ColorToken::ALL
        .into_iter()
        .find(|t| !tokens.color(*t).is_valid())
    {
        return Err(TokenDefect::new(
            TokenSection::Colors,
            format!("{} is out of range", token.variable_name()),
        ));
    }

    if !non_negative(&tokens.spacing.values()) {
        return Err(TokenDefect::new(TokenSection::Spacing, "negative or non-finite value"));
    }

    if let Some((name, _)) = tokens
        .typography
        .styles()
        .into_iter()
        .find(|(_, style)| !style.is_well_formed())
    {
        return Err(TokenDefect::new(
            TokenSection::Typography,
            format!("{name} has invalid metrics"),
        ));
    }

    if !positive(&tokens.icon_sizes.values()) {
        return Err(TokenDefect::new(TokenSection::IconSizes, "non-positive size"));
    }

    if !tokens
        .opacity
        .values()
        .iter()
        .all(|v| (0.0..=1.0).contains(v))
    {
        return Err(TokenDefect::new(TokenSection::Opacity, "value outside 0.0..=1.0"));
    }

    if !positive(&tokens.avatar_sizes.values()) {
        return Err(TokenDefect::new(TokenSection::AvatarSizes, "non-positive size"));
    }

    if !non_negative(&tokens.borders.metrics()) {
        return Err(TokenDefect::new(TokenSection::Borders, "negative or non-finite metric"));
    }
    let border = tokens.colors.border;
    if tokens.borders.card.color != border || tokens.borders.input.color != border {
        return Err(TokenDefect::new(
            TokenSection::Borders,
            "card/input border color differs from palette border",
        ));
    }

    Ok(())
}

/// True iff every section of `tokens` is usable.
///
/// Stricter than a presence check: sections always exist, so this also
/// rejects values that are present but unusable (out-of-range colors,
/// negative metrics, `line_height < font_size`, border colors that no
/// longer match the palette). See [`validate`] for the first defect found.
pub fn is_complete(tokens: &DesignTokens) -> bool {
    validate(tokens).is_ok()
}

/// Accept `input` only if it is exactly `"light"` or `"dark"`, otherwise `fallback`
pub fn normalize_mode(input: Option<&str>, fallback: ThemeMode) -> ThemeMode {
    input.and_then(ThemeMode::parse).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::factory::create_design_tokens;

    #[test]
    fn test_derived_sets_are_complete() {
        for mode in ThemeMode::ALL {
            assert!(is_complete(&create_design_tokens(mode)));
        }
    }

    #[test]
    fn test_detects_bad_opacity() {
        let mut tokens = create_design_tokens(ThemeMode::Light);
        tokens.opacity.disabled = 1.5;
        let defect = validate(&tokens).unwrap_err();
        assert_eq!(defect.section, TokenSection::Opacity);
    }

    #[test]
    fn test_detects_non_finite_spacing() {
        let mut tokens = create_design_tokens(ThemeMode::Dark);
        tokens.spacing.md = f32::NAN;
        assert_eq!(validate(&tokens).unwrap_err().section, TokenSection::Spacing);
    }

    #[test]
    fn test_detects_border_color_drift() {
        let mut tokens = create_design_tokens(ThemeMode::Dark);
        tokens.borders.input.color = Color::from_hex(0xFF0000);
        let defect = validate(&tokens).unwrap_err();
        assert_eq!(defect.section, TokenSection::Borders);
        assert!(!is_complete(&tokens));
    }

    #[test]
    fn test_detects_collapsed_text_style() {
        let mut tokens = create_design_tokens(ThemeMode::Light);
        tokens.typography.caption.font_size = 0.0;
        let defect = validate(&tokens).unwrap_err();
        assert_eq!(defect.section, TokenSection::Typography);
        assert!(defect.detail.contains("caption"));
    }

    #[test]
    fn test_present_but_unusable_is_incomplete() {
        let mut tokens = create_design_tokens(ThemeMode::Dark);
        tokens.typography.display_large.line_height = tokens.typography.display_large.font_size - 1.0;
        assert!(!is_complete(&tokens));
    }

    #[test]
    fn test_detects_out_of_range_color() {
        let mut tokens = create_design_tokens(ThemeMode::Light);
        tokens.colors.accent = Color::new(1.2, 0.0, 0.0, 1.0);
        assert_eq!(validate(&tokens).unwrap_err().section, TokenSection::Colors);
    }

    #[test]
    fn test_normalize_mode() {
        use ThemeMode::*;

        assert_eq!(normalize_mode(Some("light"), Dark), Light);
        assert_eq!(normalize_mode(Some("dark"), Light), Dark);
        for garbage in [Some(""), Some("purple"), Some("DARK"), Some("light "), None] {
            assert_eq!(normalize_mode(garbage, Light), Light, "{garbage:?}");
            assert_eq!(normalize_mode(garbage, Dark), Dark, "{garbage:?}");
        }
    }
}
