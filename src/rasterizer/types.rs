//! Core types for the rasterizer

use serde::{Serialize, Deserialize};

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Move each channel towards white by `amount` (0.0-1.0), alpha untouched
    pub fn lighten(self, amount: f32) -> Self {
        let t = amount.clamp(0.0, 1.0);
        let mix = |c: u8| (c as f32 + (255.0 - c as f32) * t).round() as u8;
        Self {
            r: mix(self.r),
            g: mix(self.g),
            b: mix(self.b),
            a: self.a,
        }
    }

    /// Convert to [u8; 4] for texture upload
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Fill colors for the two halves of a split triangle.
///
/// `top` paints the half above the split line (apex pMin), `bottom` the half
/// below it (apex pMax).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfColors {
    pub top: Color,
    pub bottom: Color,
}

impl HalfColors {
    pub const fn new(top: Color, bottom: Color) -> Self {
        Self { top, bottom }
    }

    /// Same color for both halves
    pub const fn uniform(color: Color) -> Self {
        Self { top: color, bottom: color }
    }
}

/// Buffer size and colors for one scene rebuild
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSettings {
    /// Buffer width in cells
    pub width: usize,
    /// Buffer height in cells
    pub height: usize,
    /// Color every cell starts from
    pub background: Color,
    /// Colors of the triangle the user edits
    pub primary: HalfColors,
    /// Colors of the mirrored companion triangle (drawn on top)
    pub secondary: HalfColors,
}
