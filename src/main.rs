//! Raster Visuals: drag the corners of a triangle and watch it scanline-fill
//! a coarse pixel grid
//!
//! - Pixel-center sampling with a half-open tie-break
//! - Top and bottom halves of the split triangle in their own colors
//! - A mirrored companion triangle sharing the p1-p2 edge
//! - Scene layout and colors from a RON config file

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod rasterizer;
mod config;
mod input;
mod app;
mod view;
mod snapshot;

use macroquad::prelude::*;
use app::{AppState, Scene};
use config::{load_config_or_default, save_config, DEFAULT_CONFIG_PATH};
use input::{Command, MouseState};
use std::path::PathBuf;

/// Config file from the first command-line argument, or the default name
fn config_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

fn window_conf() -> Conf {
    let config = load_config_or_default(config_path());
    let (width, height) = config.window_size();
    Conf {
        window_title: format!("Raster Visuals v{}", VERSION),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        sample_count: 8,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let path = config_path();
    let mut config = load_config_or_default(&path);
    let mut state = AppState::new(Scene::from_config(&config), config.initial_triangle());

    tracing::info!(
        "Raster Visuals v{}: {}x{} cells",
        VERSION,
        config.screen.width,
        config.screen.height
    );

    let mut last_left_down = false;

    loop {
        let mouse = MouseState::poll(last_left_down);
        last_left_down = mouse.left_down;
        state = state.handle_mouse(mouse);

        let now = get_time();
        for command in Command::poll() {
            match command {
                Command::Reset => {
                    state = state.with_triangle(config.initial_triangle());
                    state.set_status("Triangle reset", now, 2.0);
                }
                Command::SaveScene => {
                    config.triangle = Some(state.triangle);
                    match save_config(&config, &path) {
                        Ok(()) => {
                            tracing::info!("saved scene to {}", path.display());
                            state.set_status(&format!("Saved to {}", path.display()), now, 3.0);
                        }
                        Err(e) => {
                            tracing::warn!("failed to save {}: {}", path.display(), e);
                            state.set_status(&format!("Save failed: {}", e), now, 5.0);
                        }
                    }
                }
                Command::ExportSnapshot => match snapshot::save_png(&state.buffer, snapshot::SNAPSHOT_PATH) {
                    Ok(()) => {
                        state.set_status(&format!("Exported {}", snapshot::SNAPSHOT_PATH), now, 3.0);
                    }
                    Err(e) => {
                        tracing::warn!("snapshot export failed: {}", e);
                        state.set_status(&format!("Export failed: {}", e), now, 5.0);
                    }
                },
                Command::Quit => return,
            }
        }

        view::draw_scene(&state, &config.palette, now);

        next_frame().await;
    }
}
