//! Scanline triangle rasterizer
//!
//! Features:
//! - Pixel-center sampling (a cell is filled when its center is inside)
//! - Half-open tie-breaking, so triangles sharing an edge tile exactly
//! - Clipping to the buffer, any finite vertex position is safe
//! - Two colors per triangle (top half / bottom half)

mod math;
mod types;
mod buffer;
mod classify;
mod scanline;
mod render;

pub use math::*;
pub use types::*;
pub use buffer::*;
pub use classify::*;
pub use scanline::*;
pub use render::*;
