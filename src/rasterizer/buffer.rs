//! Raster buffer and the pixel sink the fill engine writes through

use super::types::Color;

/// Receiver for pixel writes produced by the scanline fill.
///
/// Coordinates handed to a sink are always inside the `width x height`
/// the fill was asked to clip against.
pub trait PixelSink {
    fn set_pixel(&mut self, x: usize, y: usize, color: Color);
}

impl<F: FnMut(usize, usize, Color)> PixelSink for F {
    fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        self(x, y, color)
    }
}

/// Fixed-size row-major grid of colors (index `y * width + x`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    cells: Vec<Color>,
    width: usize,
    height: usize,
}

impl RasterBuffer {
    /// Create a buffer with every cell set to `background`
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self {
            cells: vec![background; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Number of cells currently holding `color`
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// RGBA bytes, 4 per cell, for texture upload and image export
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.cells.iter().flat_map(|c| c.to_bytes()).collect()
    }
}

impl PixelSink for RasterBuffer {
    /// Out-of-range writes mean the row/column clamping is broken, so they panic.
    fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} raster buffer",
            x, y, self.width, self.height
        );
        self.cells[y * self.width + x] = color;
    }
}
