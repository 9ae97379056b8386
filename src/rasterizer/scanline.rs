//! Scanline fill of a single half-triangle
//!
//! A cell `(x, y)` is covered when its center `(x + 0.5, y + 0.5)` is inside
//! the half. Ties are broken half-open in both directions:
//! - rows: `y_top <= center < y_bottom`, so the row sitting exactly on the
//!   shared split line belongs to the bottom half
//! - columns: `left <= center < right`, so two triangles sharing an edge
//!   never both claim a cell on it

use super::buffer::PixelSink;
use super::classify::HalfTriangle;
use super::types::Color;

/// Clip an inclusive `[first, last]` index span to `[0, len)`.
/// NaN bounds give an empty span.
fn clip_span(first: f32, last: f32, len: usize) -> Option<(usize, usize)> {
    if len == 0 || first.is_nan() || last.is_nan() {
        return None;
    }
    let first = first.max(0.0);
    let last = last.min((len - 1) as f32);
    if first > last {
        return None;
    }
    Some((first as usize, last as usize))
}

/// Rows whose centers lie in `[y_top, y_bottom)`, clipped to the buffer
pub fn row_span(y_top: f32, y_bottom: f32, height: usize) -> Option<(usize, usize)> {
    clip_span((y_top - 0.5).ceil(), (y_bottom - 0.5).ceil() - 1.0, height)
}

/// Columns whose centers lie in `[left_x, right_x)`, clipped to the buffer
pub fn column_span(left_x: f32, right_x: f32, width: usize) -> Option<(usize, usize)> {
    clip_span((left_x - 0.5).ceil(), (right_x - 0.5).ceil() - 1.0, width)
}

/// Fill one half-triangle into `sink`, clipped to `width x height`.
///
/// Edge x positions start at the center of the first visible row and advance
/// by their gradient once per row. Returns the number of pixels written.
pub fn fill_half<S: PixelSink>(
    half: &HalfTriangle,
    color: Color,
    width: usize,
    height: usize,
    sink: &mut S,
) -> usize {
    let dy = half.height();
    if !(dy > 0.0) {
        return 0;
    }

    let Some((row_first, row_last)) = row_span(half.y_top(), half.y_bottom(), height) else {
        return 0;
    };

    let left_gradient = (half.left.end.x - half.left.start.x) / dy;
    let right_gradient = (half.right.end.x - half.right.start.x) / dy;

    let projection = row_first as f32 + 0.5 - half.y_top();
    let mut left_x = half.left.start.x + left_gradient * projection;
    let mut right_x = half.right.start.x + right_gradient * projection;

    let mut written = 0;
    for y in row_first..=row_last {
        if let Some((column_first, column_last)) = column_span(left_x, right_x, width) {
            for x in column_first..=column_last {
                sink.set_pixel(x, y, color);
            }
            written += column_last - column_first + 1;
        }

        left_x += left_gradient;
        right_x += right_gradient;
    }

    written
}
