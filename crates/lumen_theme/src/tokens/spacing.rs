//! Spacing tokens (4px base unit)

use serde::Serialize;

/// Spacing scale, semantic paddings, and component heights
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpacingTokens {
    // Base scale
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,

    // Semantic spacing
    pub screen_padding: f32,
    pub card_padding: f32,
    pub button_padding: f32,
    pub input_padding: f32,
    pub section_spacing: f32,

    // Icon sizes
    pub icon_size_small: f32,
    pub icon_size_medium: f32,
    pub icon_size_large: f32,
    pub icon_size_xlarge: f32,
    pub icon_size_hero: f32,

    // Component heights
    pub button_height: f32,
    pub input_height: f32,
    pub app_bar_height: f32,
    pub tab_bar_height: f32,
}

impl SpacingTokens {
    /// All values in declaration order
    pub fn values(&self) -> [f32; 21] {
        [
            self.xs,
            self.sm,
            self.md,
            self.lg,
            self.xl,
            self.xxl,
            self.xxxl,
            self.screen_padding,
            self.card_padding,
            self.button_padding,
            self.input_padding,
            self.section_spacing,
            self.icon_size_small,
            self.icon_size_medium,
            self.icon_size_large,
            self.icon_size_xlarge,
            self.icon_size_hero,
            self.button_height,
            self.input_height,
            self.app_bar_height,
            self.tab_bar_height,
        ]
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 16.0,
            lg: 24.0,
            xl: 32.0,
            xxl: 48.0,
            xxxl: 64.0,
            screen_padding: 20.0,
            card_padding: 16.0,
            button_padding: 16.0,
            input_padding: 12.0,
            section_spacing: 24.0,
            icon_size_small: 16.0,
            icon_size_medium: 20.0,
            icon_size_large: 24.0,
            icon_size_xlarge: 32.0,
            icon_size_hero: 64.0,
            button_height: 48.0,
            input_height: 48.0,
            app_bar_height: 56.0,
            tab_bar_height: 60.0,
        }
    }
}
