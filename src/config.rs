//! Scene configuration
//!
//! Uses RON (Rusty Object Notation), same as the level files. Every field
//! has a default, so a config file only needs the values it changes.

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::rasterizer::{Color, HalfColors, Point, RasterSettings, Triangle};

/// Default config file, looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "raster_visuals.ron";

/// Error type for config loading and saving
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Raster buffer size in cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self { width: 42, height: 24 }
    }
}

/// Window layout: the window is a grid of square tiles and the raster
/// buffer starts at tile (`origin_tile_x`, `origin_tile_y`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub pixels_per_tile: f32,
    pub tiles_x: u32,
    pub tiles_y: u32,
    pub origin_tile_x: f32,
    pub origin_tile_y: f32,
    /// Half-size of the square around a vertex that counts as a hit, in window pixels
    pub handle_radius: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            pixels_per_tile: 32.0,
            tiles_x: 50,
            tiles_y: 30,
            origin_tile_x: 4.0,
            origin_tile_y: 3.0,
            handle_radius: 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub window_background: Color,
    /// Buffer cells not covered by any triangle
    pub inactive: Color,
    pub primary: HalfColors,
    pub secondary: HalfColors,
    /// Handle colors for p0, p1, p2
    pub handles: [Color; 3],
    pub edge: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            window_background: Color::new(13, 18, 23),
            inactive: Color::new(31, 36, 41),
            primary: HalfColors::new(Color::new(155, 89, 182), Color::new(26, 188, 156)),
            secondary: HalfColors::new(Color::new(230, 126, 34), Color::new(241, 196, 15)),
            handles: [
                Color::new(231, 76, 60),
                Color::new(46, 204, 113),
                Color::new(52, 152, 219),
            ],
            edge: Color::new(170, 175, 180),
            text: Color::new(200, 200, 200),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub screen: ScreenConfig,
    pub view: ViewConfig,
    pub palette: Palette,
    /// Starting triangle in cell units (None = placed relative to the screen size)
    pub triangle: Option<Triangle>,
}

impl Config {
    /// Reject values the renderer cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "screen must be at least 1x1, got {}x{}",
                self.screen.width, self.screen.height
            )));
        }
        if !(self.view.pixels_per_tile > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "pixels_per_tile must be positive, got {}",
                self.view.pixels_per_tile
            )));
        }
        if self.view.tiles_x == 0 || self.view.tiles_y == 0 {
            return Err(ConfigError::Invalid("window needs at least one tile".to_string()));
        }
        if let Some(t) = &self.triangle {
            if !t.vertices().iter().all(|p| p.is_finite()) {
                return Err(ConfigError::Invalid("triangle vertices must be finite".to_string()));
            }
        }
        Ok(())
    }

    /// The configured triangle, or one spread over the screen
    pub fn initial_triangle(&self) -> Triangle {
        self.triangle.unwrap_or_else(|| {
            let w = self.screen.width as f32;
            let h = self.screen.height as f32;
            Triangle::new(
                Point::new(w * 0.2, h * 0.2),
                Point::new(w * 0.5, h * 0.8),
                Point::new(w * 0.9, h * 0.3),
            )
        })
    }

    pub fn raster_settings(&self) -> RasterSettings {
        RasterSettings {
            width: self.screen.width,
            height: self.screen.height,
            background: self.palette.inactive,
            primary: self.palette.primary,
            secondary: self.palette.secondary,
        }
    }

    /// Window size in pixels
    pub fn window_size(&self) -> (f32, f32) {
        (
            self.view.tiles_x as f32 * self.view.pixels_per_tile,
            self.view.tiles_y as f32 * self.view.pixels_per_tile,
        )
    }
}

/// Load and validate a config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: Config = ron::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

/// Save a config to a RON file
pub fn save_config<P: AsRef<Path>>(config: &Config, path: P) -> Result<(), ConfigError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Load a config, falling back to defaults when the file is missing or bad
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Config {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!("no config at {}, using defaults", path.display());
        return Config::default();
    }

    match load_config(path) {
        Ok(config) => {
            tracing::info!("loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("failed to load {}: {}, using defaults", path.display(), e);
            Config::default()
        }
    }
}
