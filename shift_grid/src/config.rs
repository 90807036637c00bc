// config.rs - Compile-time settings for the window, timer and palette

use egui::Color32;
use std::time::Duration;

use crate::grid::{CELL_SIZE, NUM_COLS, NUM_ROWS};

pub const RUN_PERIOD: Duration = Duration::from_millis(300);

pub const CANVAS_WIDTH: usize = NUM_COLS * CELL_SIZE;   // 500 px
pub const CANVAS_HEIGHT: usize = NUM_ROWS * CELL_SIZE;  // 500 px

pub const WINDOW_SIZE: [f32; 2] = [540.0, 660.0];
pub const WINDOW_TITLE: &str = "Shift Grid";

/// Colors used by `render::render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub alive: Color32,
    pub dead: Color32,
    pub line: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Color32::from_rgb(0xba, 0xba, 0x18),  // olive
            dead: Color32::from_rgb(0xf4, 0xf4, 0xf4),
            line: Color32::BLACK,
        }
    }
}
