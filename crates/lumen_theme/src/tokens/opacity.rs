//! Opacity tokens for theming

use serde::Serialize;

/// Complete set of opacity tokens
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OpacityTokens {
    pub disabled: f32,
    pub inactive: f32,
    pub subtle: f32,
    pub medium: f32,
    pub full: f32,
}

impl OpacityTokens {
    pub fn values(&self) -> [f32; 5] {
        [self.disabled, self.inactive, self.subtle, self.medium, self.full]
    }
}

impl Default for OpacityTokens {
    fn default() -> Self {
        Self {
            disabled: 0.6,
            inactive: 0.7,
            subtle: 0.8,
            medium: 0.9,
            full: 1.0,
        }
    }
}
