//! Drawing: the raster buffer as a tile grid, the triangle outline and the
//! draggable vertex handles

use macroquad::prelude::*;
use crate::app::AppState;
use crate::config::Palette;
use crate::rasterizer::{Color as RasterColor, Point};

/// Every other cell is lightened by this much (checkerboard)
const CHECKER_LIGHTEN: f32 = 0.04;
const HANDLE_SIZE: f32 = 16.0;
const HANDLE_HOVER_SIZE: f32 = 24.0;
const EDGE_THICKNESS: f32 = 2.0;

fn mq_color(c: RasterColor) -> Color {
    Color::from_rgba(c.r, c.g, c.b, c.a)
}

fn draw_centered_square(cx: f32, cy: f32, size: f32, color: Color) {
    draw_rectangle(cx - size / 2.0, cy - size / 2.0, size, size, color);
}

/// Draw one frame
pub fn draw_scene(state: &AppState, palette: &Palette, now: f64) {
    clear_background(mq_color(palette.window_background));

    let mapping = state.scene.mapping;
    let tile = mapping.tile_size;
    let buffer = &state.buffer;

    // Cells
    for (i, &cell) in buffer.cells().iter().enumerate() {
        let x = i % buffer.width();
        let y = i / buffer.width();
        let color = if x % 2 == y % 2 {
            cell
        } else {
            cell.lighten(CHECKER_LIGHTEN)
        };
        let (wx, wy) = mapping.cell_to_window(Point::new(x as f32, y as f32));
        draw_rectangle(wx, wy, tile, tile, mq_color(color));
    }

    // Triangle outline
    let [p0, p1, p2] = state.triangle.vertices().map(|p| mapping.cell_to_window(p));
    let edge = mq_color(palette.edge);
    for (a, b) in [(p0, p1), (p2, p1), (p0, p2)] {
        draw_line(a.0, a.1, b.0, b.1, EDGE_THICKNESS, edge);
    }

    // Handles
    let hovered = state.hovered();
    for (i, (px, py)) in [p0, p1, p2].into_iter().enumerate() {
        let handle = palette.handles[i];
        if hovered == Some(i) {
            draw_centered_square(px, py, HANDLE_HOVER_SIZE, mq_color(handle.lighten(0.3)));
        }
        draw_centered_square(px, py, HANDLE_SIZE, mq_color(handle));
    }

    draw_status_line(state, palette, now);
}

fn draw_status_line(state: &AppState, palette: &Palette, now: f64) {
    let text_color = mq_color(palette.text);
    let filled = state.buffer.cells().len() - state.buffer.count(state.scene.settings.background);
    let t = &state.triangle;

    let info = format!(
        "p0 ({:.2}, {:.2})  p1 ({:.2}, {:.2})  p2 ({:.2}, {:.2})  |  {} cells filled  |  R reset  S save  P snapshot",
        t.p0.x, t.p0.y, t.p1.x, t.p1.y, t.p2.x, t.p2.y, filled
    );
    let baseline = screen_height() - 12.0;
    draw_text(&info, 12.0, baseline, 18.0, text_color);

    if let Some(status) = state.status_text(now) {
        draw_text(status, 12.0, 24.0, 20.0, text_color);
    }
}
