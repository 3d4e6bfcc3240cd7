//! Border geometry tokens and their themed counterparts

use serde::Serialize;

use crate::color::Color;

/// Border radius scale
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadiusTokens {
    pub none: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub full: f32,
}

/// Border width scale
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BorderWidths {
    pub none: f32,
    pub thin: f32,
    pub medium: f32,
    pub thick: f32,
}

/// Radius and width of a component outline
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BorderShape {
    pub radius: f32,
    pub width: f32,
}

impl BorderShape {
    pub const fn new(radius: f32, width: f32) -> Self {
        Self { radius, width }
    }

    /// Attach a color to this shape
    pub fn colored(self, color: Color) -> ColoredBorder {
        ColoredBorder {
            radius: self.radius,
            width: self.width,
            color,
        }
    }
}

/// A component outline that always carries its color
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ColoredBorder {
    pub radius: f32,
    pub width: f32,
    pub color: Color,
}

impl ColoredBorder {
    pub fn shape(&self) -> BorderShape {
        BorderShape::new(self.radius, self.width)
    }
}

/// Mode-independent border geometry
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BorderTokens {
    pub radius: RadiusTokens,
    pub width: BorderWidths,
    pub button: BorderShape,
    pub card: BorderShape,
    pub input: BorderShape,
    pub pill: BorderShape,
}

impl BorderTokens {
    /// Inject `border_color` into the card and input outlines
    pub fn themed(&self, border_color: Color) -> ThemedBorders {
        ThemedBorders {
            radius: self.radius.clone(),
            width: self.width.clone(),
            button: self.button,
            card: self.card.colored(border_color),
            input: self.input.colored(border_color),
            pill: self.pill,
        }
    }
}

impl Default for BorderTokens {
    fn default() -> Self {
        Self {
            radius: RadiusTokens {
                none: 0.0,
                xs: 2.0,
                sm: 4.0,
                md: 8.0,
                lg: 12.0,
                xl: 16.0,
                xxl: 24.0,
                full: 9999.0,
            },
            width: BorderWidths {
                none: 0.0,
                thin: 1.0,
                medium: 2.0,
                thick: 4.0,
            },
            button: BorderShape::new(12.0, 0.0),
            card: BorderShape::new(16.0, 1.0),
            input: BorderShape::new(8.0, 1.0),
            pill: BorderShape::new(9999.0, 0.0),
        }
    }
}

/// Border geometry with palette colors injected into card and input
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemedBorders {
    pub radius: RadiusTokens,
    pub width: BorderWidths,
    pub button: BorderShape,
    pub card: ColoredBorder,
    pub input: ColoredBorder,
    pub pill: BorderShape,
}

impl ThemedBorders {
    /// Every radius and width value, including component shapes
    pub fn metrics(&self) -> Vec<f32> {
        let r = &self.radius;
        let w = &self.width;
        vec![
            r.none,
            r.xs,
            r.sm,
            r.md,
            r.lg,
            r.xl,
            r.xxl,
            r.full,
            w.none,
            w.thin,
            w.medium,
            w.thick,
            self.button.radius,
            self.button.width,
            self.card.radius,
            self.card.width,
            self.input.radius,
            self.input.width,
            self.pill.radius,
            self.pill.width,
        ]
    }
}
