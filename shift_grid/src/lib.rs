// lib.rs - Shift Grid: a 25x25 cell pattern that drifts in the steered direction

pub mod config;    // Window, timer and palette settings
pub mod error;     // Error types
pub mod grid;      // Grid state and the shift rule
pub mod logging;   // tracing subscriber setup
pub mod render;    // Canvas trait and full repaint
pub mod scheduler; // Periodic tick task
pub mod surface;   // Event mapping onto the grid
pub mod ui;        // eframe app

pub use error::{AppError, GridError};
pub use grid::{Direction, GridState};
pub use surface::{Button, Event, Surface};
