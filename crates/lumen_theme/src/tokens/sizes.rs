//! Icon and avatar size scales

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IconSizes {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub hero: f32,
}

impl IconSizes {
    pub fn values(&self) -> [f32; 7] {
        [self.xs, self.sm, self.md, self.lg, self.xl, self.xxl, self.hero]
    }
}

impl Default for IconSizes {
    fn default() -> Self {
        Self {
            xs: 16.0,
            sm: 20.0,
            md: 24.0,
            lg: 32.0,
            xl: 40.0,
            xxl: 48.0,
            hero: 64.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AvatarSizes {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
}

impl AvatarSizes {
    pub fn values(&self) -> [f32; 6] {
        [self.xs, self.sm, self.md, self.lg, self.xl, self.xxl]
    }
}

impl Default for AvatarSizes {
    fn default() -> Self {
        Self {
            xs: 24.0,
            sm: 32.0,
            md: 40.0,
            lg: 48.0,
            xl: 64.0,
            xxl: 80.0,
        }
    }
}
