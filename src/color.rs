use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const RAY_WHITE: Self = Self::rgb(245, 245, 245);
    pub const GRAY: Self = Self::rgb(130, 130, 130);
    pub const DARK_GRAY: Self = Self::rgb(80, 80, 80);
    pub const GOLD: Self = Self::rgb(255, 203, 0);
    pub const ORANGE: Self = Self::rgb(255, 161, 0);
    pub const PINK: Self = Self::rgb(255, 109, 194);
    pub const RED: Self = Self::rgb(230, 41, 55);
    pub const GREEN: Self = Self::rgb(0, 228, 48);
    pub const LIME: Self = Self::rgb(0, 158, 47);
    pub const SKY_BLUE: Self = Self::rgb(102, 191, 255);
    pub const PURPLE: Self = Self::rgb(200, 122, 255);
    pub const VIOLET: Self = Self::rgb(135, 60, 190);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_visible(self) -> bool {
        self.a != 0
    }

    /// Multiply the color channels by `factor`, clamping at 255. Alpha is kept.
    pub fn brighten(self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
        Self { r: scale(self.r), g: scale(self.g), b: scale(self.b), a: self.a }
    }
}
