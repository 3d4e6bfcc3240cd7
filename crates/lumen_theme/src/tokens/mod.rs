//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors (per mode, see [`ColorPalette`])
//! - Spacing
//! - Typography
//! - Icon and avatar sizes
//! - Opacity
//! - Border geometry
//!
//! Everything except colors is mode-independent and lives in
//! [`StaticTokenCatalog`].

mod border;
mod opacity;
mod palette;
mod sizes;
mod spacing;
mod typography;

pub use border::*;
pub use opacity::*;
pub use palette::*;
pub use sizes::*;
pub use spacing::*;
pub use typography::*;

use serde::Serialize;

/// Mode-independent tokens shared by every derived token set
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StaticTokenCatalog {
    pub spacing: SpacingTokens,
    pub typography: TypographyTokens,
    pub icon_sizes: IconSizes,
    pub opacity: OpacityTokens,
    pub avatar_sizes: AvatarSizes,
    pub borders: BorderTokens,
}
