//! Typography tokens (Material Design 3 type scale)

use serde::Serialize;

/// CSS-style numeric font weight
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const REGULAR: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const SEMIBOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);
}

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    Uppercase,
    Lowercase,
    Capitalize,
}

/// A single text style
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextStyle {
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub line_height: f32,
    pub letter_spacing: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
}

impl TextStyle {
    pub const fn new(font_size: f32, font_weight: FontWeight, line_height: f32, letter_spacing: f32) -> Self {
        Self {
            font_size,
            font_weight,
            line_height,
            letter_spacing,
            text_transform: None,
        }
    }

    pub fn with_transform(mut self, transform: TextTransform) -> Self {
        self.text_transform = Some(transform);
        self
    }

    /// Positive, finite metrics with a line height no smaller than the font size
    pub fn is_well_formed(&self) -> bool {
        self.font_size.is_finite()
            && self.font_size > 0.0
            && self.line_height.is_finite()
            && self.line_height >= self.font_size
            && self.letter_spacing.is_finite()
    }
}

/// Complete type scale
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypographyTokens {
    pub display_large: TextStyle,
    pub display_medium: TextStyle,
    pub display_small: TextStyle,
    pub headline_large: TextStyle,
    pub headline_medium: TextStyle,
    pub headline_small: TextStyle,
    pub title_large: TextStyle,
    pub title_medium: TextStyle,
    pub title_small: TextStyle,
    pub body_large: TextStyle,
    pub body_medium: TextStyle,
    pub body_small: TextStyle,
    pub label_large: TextStyle,
    pub label_medium: TextStyle,
    pub label_small: TextStyle,
    pub button: TextStyle,
    pub caption: TextStyle,
    pub overline: TextStyle,

    // Legacy aliases
    pub heading_large: TextStyle,
    pub heading_medium: TextStyle,
    pub heading_small: TextStyle,

    // Weight helpers for inline use
    pub semibold: FontWeight,
    pub medium: FontWeight,
    pub bold: FontWeight,
}

impl TypographyTokens {
    /// Every text style, in declaration order
    pub fn styles(&self) -> [(&'static str, &TextStyle); 21] {
        [
            ("display_large", &self.display_large),
            ("display_medium", &self.display_medium),
            ("display_small", &self.display_small),
            ("headline_large", &self.headline_large),
            ("headline_medium", &self.headline_medium),
            ("headline_small", &self.headline_small),
            ("title_large", &self.title_large),
            ("title_medium", &self.title_medium),
            ("title_small", &self.title_small),
            ("body_large", &self.body_large),
            ("body_medium", &self.body_medium),
            ("body_small", &self.body_small),
            ("label_large", &self.label_large),
            ("label_medium", &self.label_medium),
            ("label_small", &self.label_small),
            ("button", &self.button),
            ("caption", &self.caption),
            ("overline", &self.overline),
            ("heading_large", &self.heading_large),
            ("heading_medium", &self.heading_medium),
            ("heading_small", &self.heading_small),
        ]
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        use FontWeight as W;

        Self {
            display_large: TextStyle::new(57.0, W::REGULAR, 64.0, -0.25),
            display_medium: TextStyle::new(45.0, W::REGULAR, 52.0, 0.0),
            display_small: TextStyle::new(36.0, W::REGULAR, 44.0, 0.0),
            headline_large: TextStyle::new(32.0, W::REGULAR, 40.0, 0.0),
            headline_medium: TextStyle::new(28.0, W::REGULAR, 36.0, 0.0),
            headline_small: TextStyle::new(24.0, W::REGULAR, 32.0, 0.0),
            title_large: TextStyle::new(22.0, W::MEDIUM, 28.0, 0.0),
            title_medium: TextStyle::new(16.0, W::MEDIUM, 24.0, 0.15),
            title_small: TextStyle::new(14.0, W::MEDIUM, 20.0, 0.1),
            body_large: TextStyle::new(16.0, W::REGULAR, 24.0, 0.5),
            body_medium: TextStyle::new(14.0, W::REGULAR, 20.0, 0.25),
            body_small: TextStyle::new(12.0, W::REGULAR, 16.0, 0.4),
            label_large: TextStyle::new(14.0, W::MEDIUM, 20.0, 0.1),
            label_medium: TextStyle::new(12.0, W::MEDIUM, 16.0, 0.5),
            label_small: TextStyle::new(11.0, W::MEDIUM, 16.0, 0.5),
            button: TextStyle::new(14.0, W::MEDIUM, 20.0, 0.1),
            caption: TextStyle::new(12.0, W::REGULAR, 16.0, 0.4),
            overline: TextStyle::new(10.0, W::MEDIUM, 16.0, 1.5)
                .with_transform(TextTransform::Uppercase),
            heading_large: TextStyle::new(32.0, W::BOLD, 40.0, 0.0),
            heading_medium: TextStyle::new(24.0, W::SEMIBOLD, 32.0, 0.0),
            heading_small: TextStyle::new(20.0, W::SEMIBOLD, 28.0, 0.0),
            semibold: W::SEMIBOLD,
            medium: W::MEDIUM,
            bold: W::BOLD,
        }
    }
}
