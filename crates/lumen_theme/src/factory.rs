//! Token factory: theme mode -> complete design token set
//!
//! Combines the mode-independent [`StaticTokenCatalog`] with the
//! [`ColorPalette`] selected for the mode, and injects the palette's
//! `border` color into the card and input outlines.

use serde::Serialize;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use crate::color::Color;
use crate::mode::ThemeMode;
use crate::tokens::*;
use crate::validate;

/// The complete derived token set for one mode
///
/// Immutable once produced; switching modes produces a new set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DesignTokens {
    pub mode: ThemeMode,
    pub colors: ColorPalette,
    pub spacing: SpacingTokens,
    pub typography: TypographyTokens,
    pub icon_sizes: IconSizes,
    pub opacity: OpacityTokens,
    pub avatar_sizes: AvatarSizes,
    pub borders: ThemedBorders,
}

impl DesignTokens {
    /// Get a color token value
    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Generate a variable map from all color tokens.
    ///
    /// Keys are kebab-case names without a `--` prefix, values are hex strings.
    ///
    /// ```ignore
    /// let vars = tokens.color_variables();
    /// // vars["background-primary"] == "#ffffff"
    /// ```
    pub fn color_variables(&self) -> HashMap<String, String> {
        let mut vars = HashMap::with_capacity(ColorToken::ALL.len());
        for token in ColorToken::ALL {
            vars.insert(token.variable_name().to_string(), self.color(token).to_hex());
        }
        vars
    }
}

/// Derives [`DesignTokens`] from a palette source and a static catalog.
///
/// Pure and deterministic: the same mode always yields structurally equal
/// output. Cheap to clone.
#[derive(Clone)]
pub struct TokenFactory {
    palettes: Arc<dyn PaletteSource>,
    catalog: Arc<StaticTokenCatalog>,
}

impl TokenFactory {
    /// Factory over the given palettes and the default catalog
    pub fn new(palettes: impl PaletteSource + 'static) -> Self {
        Self::with_catalog(palettes, StaticTokenCatalog::default())
    }

    pub fn with_catalog(palettes: impl PaletteSource + 'static, catalog: StaticTokenCatalog) -> Self {
        Self {
            palettes: Arc::new(palettes),
            catalog: Arc::new(catalog),
        }
    }

    /// The static catalog shared by every derivation
    pub fn catalog(&self) -> &StaticTokenCatalog {
        &self.catalog
    }

    /// Derive the complete token set for `mode`
    pub fn derive(&self, mode: ThemeMode) -> DesignTokens {
        let colors = self.palettes.palette(mode);
        let borders = self.catalog.borders.themed(colors.border);

        DesignTokens {
            mode,
            colors,
            spacing: self.catalog.spacing.clone(),
            typography: self.catalog.typography.clone(),
            icon_sizes: self.catalog.icon_sizes.clone(),
            opacity: self.catalog.opacity.clone(),
            avatar_sizes: self.catalog.avatar_sizes.clone(),
            borders,
        }
    }

    /// Derive for `mode`, never handing back a defective set.
    ///
    /// A panicking palette source or a set that fails validation falls back
    /// to the light derivation, and then to the built-in light tokens.
    pub fn derive_checked(&self, mode: ThemeMode) -> DesignTokens {
        match self.try_derive(mode) {
            Some(tokens) => return tokens,
            None if mode == ThemeMode::Light => {}
            None => {
                tracing::warn!("TokenFactory: falling back to light tokens (requested {})", mode);
                if let Some(tokens) = self.try_derive(ThemeMode::Light) {
                    return tokens;
                }
            }
        }

        tracing::error!("TokenFactory: light derivation unusable, using built-in light tokens");
        Self::static_tokens()
    }

    fn try_derive(&self, mode: ThemeMode) -> Option<DesignTokens> {
        let tokens = match catch_unwind(AssertUnwindSafe(|| self.derive(mode))) {
            Ok(tokens) => tokens,
            Err(_) => {
                tracing::error!("TokenFactory: palette source panicked deriving {} tokens", mode);
                return None;
            }
        };

        match validate::validate(&tokens) {
            Ok(()) => Some(tokens),
            Err(defect) => {
                tracing::error!("TokenFactory: derived {} tokens are defective: {}", mode, defect);
                None
            }
        }
    }

    /// Light tokens from the built-in palettes, for code with no access to
    /// the current mode (constants, utilities). Never follows mode changes.
    pub fn static_tokens() -> DesignTokens {
        Self::default().derive(ThemeMode::Light)
    }
}

impl Default for TokenFactory {
    fn default() -> Self {
        Self::new(BuiltinPalettes)
    }
}

impl std::fmt::Debug for TokenFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenFactory")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

/// Derive tokens for `mode` with the built-in palettes
pub fn create_design_tokens(mode: ThemeMode) -> DesignTokens {
    TokenFactory::default().derive(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_border_colors_follow_palette() {
        let factory = TokenFactory::default();
        for mode in ThemeMode::ALL {
            let tokens = factory.derive(mode);
            let palette = BuiltinPalettes.palette(mode);
            assert_eq!(tokens.borders.card.color, palette.border);
            assert_eq!(tokens.borders.input.color, palette.border);
        }
    }

    #[test]
    fn test_derive_is_deterministic() {
        let factory = TokenFactory::default();
        for mode in ThemeMode::ALL {
            assert_eq!(factory.derive(mode), factory.derive(mode));
        }
    }

    #[test]
    fn test_static_sections_identical_across_modes() {
        let factory = TokenFactory::default();
        let light = factory.derive(ThemeMode::Light);
        let dark = factory.derive(ThemeMode::Dark);

        assert_eq!(light.spacing, dark.spacing);
        assert_eq!(light.typography, dark.typography);
        assert_eq!(light.icon_sizes, dark.icon_sizes);
        assert_eq!(light.opacity, dark.opacity);
        assert_eq!(light.avatar_sizes, dark.avatar_sizes);
        assert_eq!(light.borders.radius, dark.borders.radius);
        assert_ne!(light.colors, dark.colors);
    }

    #[test]
    fn test_custom_palette_border_is_injected() {
        let mut dark = ColorPalette::dark();
        dark.border = Color::parse_hex("#222").unwrap();
        let factory = TokenFactory::new(PaletteSet::new(ColorPalette::light(), dark));

        let tokens = factory.derive(ThemeMode::Dark);
        assert_eq!(tokens.borders.input.color.to_hex(), "#222222");
        assert_eq!(tokens.borders.card.color.to_hex(), "#222222");
    }

    #[test]
    fn test_color_variables_cover_palette() {
        let tokens = create_design_tokens(ThemeMode::Light);
        let vars = tokens.color_variables();
        assert_eq!(vars.len(), ColorToken::ALL.len());
        assert_eq!(vars["background-primary"], "#ffffff");
        assert_eq!(vars["border"], tokens.colors.border.to_hex());
    }

    struct BrokenDark;

    impl PaletteSource for BrokenDark {
        fn palette(&self, mode: ThemeMode) -> ColorPalette {
            match mode {
                ThemeMode::Light => ColorPalette::light(),
                ThemeMode::Dark => {
                    let mut p = ColorPalette::dark();
                    p.primary = Color::new(f32::NAN, 0.0, 0.0, 1.0);
                    p
                }
            }
        }
    }

    struct Panicking;

    impl PaletteSource for Panicking {
        fn palette(&self, _mode: ThemeMode) -> ColorPalette {
            panic!("palette table missing")
        }
    }

    #[test]
    fn test_derive_checked_falls_back_to_light() {
        let factory = TokenFactory::new(BrokenDark);
        let tokens = factory.derive_checked(ThemeMode::Dark);
        assert_eq!(tokens.mode, ThemeMode::Light);
        assert_eq!(tokens.colors, ColorPalette::light());
    }

    #[test]
    fn test_derive_checked_survives_panicking_source() {
        let factory = TokenFactory::new(Panicking);
        let tokens = factory.derive_checked(ThemeMode::Dark);
        assert_eq!(tokens, TokenFactory::static_tokens());
    }

    #[test]
    fn test_static_tokens_are_light() {
        let tokens = TokenFactory::static_tokens();
        assert_eq!(tokens.mode, ThemeMode::Light);
        assert_eq!(tokens.colors, ColorPalette::light());
    }
}
