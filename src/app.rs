//! Application state and vertex dragging
//!
//! The state is a plain value. An edit produces a new `AppState` whose
//! buffer is rasterized from scratch; nothing patches the previous frame's
//! buffer.

use crate::config::{Config, ViewConfig};
use crate::input::MouseState;
use crate::rasterizer::{rasterize_scene, Point, RasterBuffer, RasterSettings, Triangle};

/// Affine map between window pixels and raster cells:
/// `window = cell * tile_size + origin`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    pub tile_size: f32,
    pub origin_x: f32,
    pub origin_y: f32,
}

impl ScreenMapping {
    pub fn from_view(view: &ViewConfig) -> Self {
        Self {
            tile_size: view.pixels_per_tile,
            origin_x: view.origin_tile_x * view.pixels_per_tile,
            origin_y: view.origin_tile_y * view.pixels_per_tile,
        }
    }

    pub fn cell_to_window(&self, p: Point) -> (f32, f32) {
        (
            p.x * self.tile_size + self.origin_x,
            p.y * self.tile_size + self.origin_y,
        )
    }

    pub fn window_to_cell(&self, x: f32, y: f32) -> Point {
        Point::new(
            (x - self.origin_x) / self.tile_size,
            (y - self.origin_y) / self.tile_size,
        )
    }
}

/// Axis-aligned proximity test in window pixels
pub fn is_near_point(mx: f32, my: f32, px: f32, py: f32, radius: f32) -> bool {
    (mx - px).abs() < radius && (my - py).abs() < radius
}

/// Fixed parameters of the scene, derived from the config
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub mapping: ScreenMapping,
    pub handle_radius: f32,
    pub settings: RasterSettings,
}

impl Scene {
    pub fn from_config(config: &Config) -> Self {
        Self {
            mapping: ScreenMapping::from_view(&config.view),
            handle_radius: config.view.handle_radius,
            settings: config.raster_settings(),
        }
    }
}

/// Transient status line message
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub text: String,
    pub until: f64,
}

/// Everything the frame loop needs to draw and edit the triangle
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub scene: Scene,
    pub triangle: Triangle,
    /// Rasterized `triangle`, rebuilt on every edit
    pub buffer: RasterBuffer,
    /// Last mouse position in window pixels
    pub mouse: (f32, f32),
    /// Vertex index grabbed by the current drag
    pub dragging: Option<usize>,
    pub status: Option<Status>,
}

impl AppState {
    pub fn new(scene: Scene, triangle: Triangle) -> Self {
        let buffer = rasterize_scene(&triangle, &scene.settings);
        Self {
            scene,
            triangle,
            buffer,
            mouse: (0.0, 0.0),
            dragging: None,
            status: None,
        }
    }

    /// Same state with a different triangle and a freshly rasterized buffer
    pub fn with_triangle(self, triangle: Triangle) -> Self {
        let buffer = rasterize_scene(&triangle, &self.scene.settings);
        Self { triangle, buffer, ..self }
    }

    /// Index of the first vertex whose handle is under window position (x, y)
    pub fn vertex_under(&self, x: f32, y: f32) -> Option<usize> {
        self.triangle.vertices().iter().position(|&p| {
            let (px, py) = self.scene.mapping.cell_to_window(p);
            is_near_point(x, y, px, py, self.scene.handle_radius)
        })
    }

    /// Vertex under the mouse, or the one being dragged
    pub fn hovered(&self) -> Option<usize> {
        self.dragging.or_else(|| self.vertex_under(self.mouse.0, self.mouse.1))
    }

    /// Apply one frame of mouse input.
    ///
    /// A press over a handle grabs that vertex; while the button is held the
    /// grabbed vertex follows the cursor and the buffer is rebuilt on every
    /// move. Releasing drops it.
    pub fn handle_mouse(self, mouse: MouseState) -> Self {
        let mut next = self;

        if mouse.left_pressed {
            next.dragging = next.vertex_under(mouse.x, mouse.y);
            if let Some(index) = next.dragging {
                tracing::debug!(index, "grabbed vertex");
            }
        }
        if mouse.left_released || !mouse.left_down {
            next.dragging = None;
        }

        let moved = next.mouse != (mouse.x, mouse.y);
        next.mouse = (mouse.x, mouse.y);

        match next.dragging {
            Some(index) if moved => {
                let point = next.scene.mapping.window_to_cell(mouse.x, mouse.y);
                let triangle = next.triangle.with_vertex(index, point);
                next.with_triangle(triangle)
            }
            _ => next,
        }
    }

    pub fn set_status(&mut self, text: &str, now: f64, duration: f64) {
        self.status = Some(Status {
            text: text.to_string(),
            until: now + duration,
        });
    }

    /// Status text if it has not expired yet
    pub fn status_text(&self, now: f64) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|s| now < s.until)
            .map(|s| s.text.as_str())
    }
}
