//! Scene rasterization
//!
//! Every edit rebuilds the whole buffer: clear to the background, fill the
//! edited triangle, then fill its mirrored companion on top.

use super::buffer::{PixelSink, RasterBuffer};
use super::classify::split_triangle;
use super::math::Triangle;
use super::scanline::fill_half;
use super::types::{HalfColors, RasterSettings};

/// Rasterize one triangle into `sink`, clipped to `width x height`.
///
/// The top half gets `colors.top`, the bottom half `colors.bottom`.
/// Triangles with no vertical extent write nothing. Returns the number of
/// pixels written.
pub fn rasterize_triangle<S: PixelSink>(
    sink: &mut S,
    triangle: &Triangle,
    colors: HalfColors,
    width: usize,
    height: usize,
) -> usize {
    let Some(split) = split_triangle(triangle) else {
        return 0;
    };

    fill_half(&split.top, colors.top, width, height, sink)
        + fill_half(&split.bottom, colors.bottom, width, height, sink)
}

/// Build a fresh buffer for the current triangle
pub fn rasterize_scene(triangle: &Triangle, settings: &RasterSettings) -> RasterBuffer {
    let mut buffer = RasterBuffer::new(settings.width, settings.height, settings.background);

    let primary = rasterize_triangle(
        &mut buffer,
        triangle,
        settings.primary,
        settings.width,
        settings.height,
    );
    let secondary = rasterize_triangle(
        &mut buffer,
        &triangle.reflected(),
        settings.secondary,
        settings.width,
        settings.height,
    );

    tracing::debug!(primary, secondary, "rasterized {}x{} scene", settings.width, settings.height);

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::math::Point;
    use super::super::types::Color;
    use std::collections::HashSet;

    const BG: Color = Color::new(31, 36, 41);
    const TOP: Color = Color::new(155, 89, 182);
    const BOTTOM: Color = Color::new(26, 188, 156);

    fn tri(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Triangle {
        Triangle::new(Point::new(a.0, a.1), Point::new(b.0, b.1), Point::new(c.0, c.1))
    }

    /// Rasterize a single triangle into a cleared 8x8 buffer
    fn fill_8x8(triangle: &Triangle, colors: HalfColors) -> (RasterBuffer, usize) {
        let mut buffer = RasterBuffer::new(8, 8, BG);
        let written = rasterize_triangle(&mut buffer, triangle, colors, 8, 8);
        (buffer, written)
    }

    fn settings(width: usize, height: usize) -> RasterSettings {
        RasterSettings {
            width,
            height,
            background: BG,
            primary: HalfColors::new(TOP, BOTTOM),
            secondary: HalfColors::new(Color::new(230, 126, 34), Color::new(241, 196, 15)),
        }
    }

    /// Distance of `p` inside the triangle (negative outside)
    fn inside_margin(p: Point, t: &Triangle) -> f32 {
        let [a, b, c] = t.vertices();
        let area = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
        let sign = area.signum();
        [(a, b), (b, c), (c, a)]
            .iter()
            .map(|&(s, e)| {
                let len = ((e.x - s.x).powi(2) + (e.y - s.y).powi(2)).sqrt();
                sign * ((e.x - s.x) * (p.y - s.y) - (e.y - s.y) * (p.x - s.x)) / len
            })
            .fold(f32::MAX, f32::min)
    }

    /// Deterministic xorshift so the sweep tests need no extra crates
    struct Rng(u32);

    impl Rng {
        fn next(&mut self) -> u32 {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 17;
            self.0 ^= self.0 << 5;
            self.0
        }

        /// Coordinate on a quarter-cell lattice in [-4, 12)
        fn coord(&mut self) -> f32 {
            (self.next() % 64) as f32 * 0.25 - 4.0
        }
    }

    #[test]
    fn test_full_coverage() {
        let (buffer, written) = fill_8x8(&tri((-10.0, -10.0), (100.0, -10.0), (-10.0, 100.0)), HalfColors::uniform(TOP));
        assert_eq!(written, 64);
        assert_eq!(buffer.count(TOP), 64);
    }

    #[test]
    fn test_fully_outside_is_empty() {
        let (buffer, written) = fill_8x8(&tri((100.0, 100.0), (101.0, 100.0), (100.0, 101.0)), HalfColors::uniform(TOP));
        assert_eq!(written, 0);
        assert_eq!(buffer.count(BG), 64);
    }

    #[test]
    fn test_right_triangle_cell_count() {
        let (buffer, written) = fill_8x8(&tri((0.0, 0.0), (7.0, 0.0), (0.0, 7.0)), HalfColors::uniform(TOP));
        assert_eq!(written, 21);
        assert_eq!(buffer.count(TOP), 21);
        assert_eq!(buffer.count(BG), 43);
        for y in 0..8 {
            for x in 0..8 {
                let expected = if x + y <= 5 { TOP } else { BG };
                assert_eq!(buffer.get(x, y), Some(expected), "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_flat_triangle_is_empty() {
        let (buffer, written) = fill_8x8(&tri((0.0, 0.0), (4.0, 0.0), (2.0, 0.0)), HalfColors::uniform(TOP));
        assert_eq!(written, 0);
        assert_eq!(buffer.count(BG), 64);

        let (_, written) = fill_8x8(&tri((-3.0, 4.5), (20.0, 4.5), (6.0, 4.5)), HalfColors::uniform(TOP));
        assert_eq!(written, 0);
    }

    #[test]
    fn test_top_and_bottom_colors_both_used() {
        // Split line at y = 4: rows 0-3 are the top half, rows 4-7 the bottom half
        let (buffer, _) = fill_8x8(&tri((4.0, -4.0), (12.0, 4.0), (4.0, 12.0)), HalfColors::new(TOP, BOTTOM));
        assert!(buffer.count(TOP) > 0);
        assert!(buffer.count(BOTTOM) > 0);
        for y in 0..8 {
            for x in 0..8 {
                let c = buffer.get(x, y).unwrap();
                if y < 4 {
                    assert_ne!(c, BOTTOM, "bottom color above split at ({}, {})", x, y);
                } else {
                    assert_ne!(c, TOP, "top color below split at ({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn test_adjacent_triangles_tile_without_overlap() {
        let mut hits = vec![0u32; 64];
        let mut sink = |x: usize, y: usize, _: Color| hits[y * 8 + x] += 1;
        let a = rasterize_triangle(&mut sink, &tri((0.0, 0.0), (8.0, 0.0), (0.0, 8.0)), HalfColors::uniform(TOP), 8, 8);
        let b = rasterize_triangle(&mut sink, &tri((8.0, 0.0), (8.0, 8.0), (0.0, 8.0)), HalfColors::uniform(TOP), 8, 8);
        assert_eq!(a, 28);
        assert_eq!(b, 36);
        assert!(hits.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_matches_pixel_center_rule() {
        let mut rng = Rng(0x2545_f491);
        for _ in 0..500 {
            let t = tri((rng.coord(), rng.coord()), (rng.coord(), rng.coord()), (rng.coord(), rng.coord()));
            let [a, b, c] = t.vertices();
            let area = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
            if area.abs() < 1e-3 {
                continue;
            }

            let mut filled = HashSet::new();
            let mut sink = |x: usize, y: usize, _: Color| {
                assert!(filled.insert((x, y)), "cell ({}, {}) written twice for {:?}", x, y, t);
            };
            rasterize_triangle(&mut sink, &t, HalfColors::new(TOP, BOTTOM), 8, 8);

            for y in 0..8 {
                for x in 0..8 {
                    let margin = inside_margin(Point::new(x as f32 + 0.5, y as f32 + 0.5), &t);
                    let hit = filled.contains(&(x, y));
                    if hit {
                        assert!(margin > -1e-3, "({}, {}) filled outside {:?}", x, y, t);
                    } else {
                        assert!(margin < 1e-3, "({}, {}) missed inside {:?}", x, y, t);
                    }
                }
            }
        }
    }

    #[test]
    fn test_huge_coordinates_stay_in_bounds() {
        let mut rng = Rng(0x9e37_79b9);
        for _ in 0..500 {
            let mut big = || {
                let magnitude = 10f32.powi((rng.next() % 30) as i32);
                let sign = if rng.next() % 2 == 0 { 1.0 } else { -1.0 };
                sign * magnitude * ((rng.next() % 1000) as f32 / 100.0)
            };
            let t = tri((big(), big()), (big(), big()), (big(), big()));
            let mut sink = |x: usize, y: usize, _: Color| {
                assert!(x < 5 && y < 3, "({}, {}) out of bounds for {:?}", x, y, t);
            };
            rasterize_triangle(&mut sink, &t, HalfColors::uniform(TOP), 5, 3);
        }
    }

    #[test]
    fn test_scene_is_deterministic() {
        let t = tri((1.3, 0.7), (4.4, 5.9), (6.8, 2.2));
        let s = settings(8, 8);
        let first = rasterize_scene(&t, &s);
        for _ in 0..10 {
            assert_eq!(rasterize_scene(&t, &s), first);
        }
    }

    #[test]
    fn test_scene_reflected_triangle_drawn_last() {
        // p0 mirrored through p1 lands at (8, 8); the companion shares the p1-p2 edge
        let t = tri((0.0, 0.0), (4.0, 4.0), (0.0, 8.0));
        let s = settings(8, 8);
        let buffer = rasterize_scene(&t, &s);

        let mut companion = RasterBuffer::new(8, 8, BG);
        rasterize_triangle(&mut companion, &t.reflected(), s.secondary, 8, 8);
        for y in 0..8 {
            for x in 0..8 {
                let c = companion.get(x, y).unwrap();
                if c != BG {
                    assert_eq!(buffer.get(x, y), Some(c));
                }
            }
        }
        assert!(buffer.count(s.secondary.top) + buffer.count(s.secondary.bottom) > 0);
        assert!(buffer.count(TOP) + buffer.count(BOTTOM) > 0);
    }

    #[test]
    fn test_scene_uses_buffer_size() {
        let buffer = rasterize_scene(&tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0)), &settings(5, 3));
        assert_eq!(buffer.width(), 5);
        assert_eq!(buffer.height(), 3);
        assert_eq!(buffer.cells().len(), 15);
    }
}
