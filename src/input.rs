//! Mouse and keyboard input sampled once per frame

use macroquad::prelude::*;

/// Mouse button state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool,  // Just pressed this frame
    pub left_released: bool, // Just released this frame
}

impl MouseState {
    /// Poll macroquad; `last_left_down` is the button state of the previous frame
    pub fn poll(last_left_down: bool) -> Self {
        let (x, y) = mouse_position();
        let left_down = is_mouse_button_down(MouseButton::Left);
        Self {
            x,
            y,
            left_down,
            left_pressed: left_down && !last_left_down,
            left_released: !left_down && last_left_down,
        }
    }
}

/// Keyboard commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reset,
    SaveScene,
    ExportSnapshot,
    Quit,
}

impl Command {
    /// Commands whose key went down this frame, in a fixed order
    pub fn poll() -> Vec<Command> {
        [
            (KeyCode::R, Command::Reset),
            (KeyCode::S, Command::SaveScene),
            (KeyCode::P, Command::ExportSnapshot),
            (KeyCode::Escape, Command::Quit),
        ]
        .into_iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, cmd)| cmd)
        .collect()
    }
}
