// surface.rs - Maps clicks, button presses and ticks onto the grid state

use crate::grid::{CELL_SIZE, Direction, GridState, NUM_COLS, NUM_ROWS};

/// The four steering buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Top,
    Bottom,
    Left,
    Right,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::Top, Button::Bottom, Button::Left, Button::Right];

    pub fn label(self) -> &'static str {
        match self {
            Button::Top    => "Top",
            Button::Bottom => "Bottom",
            Button::Left   => "Left",
            Button::Right  => "Right",
        }
    }

    // "Top" pulls each cell from the row above, so the pattern moves down.
    pub fn direction(self) -> Direction {
        match self {
            Button::Top    => Direction::Down,
            Button::Bottom => Direction::Up,
            Button::Left   => Direction::Left,
            Button::Right  => Direction::Right,
        }
    }
}

/// Raw input, already reduced to canvas pixels or a button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    CanvasClick { x: i32, y: i32 },
    Direction(Button),
    Tick,
}

/// Cell under a canvas pixel, or `None` when the pixel is off the grid.
pub fn pixel_to_cell(x: i32, y: i32) -> Option<(usize, usize)> {
    let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
    let (row, col) = (y / CELL_SIZE, x / CELL_SIZE);
    (row < NUM_ROWS && col < NUM_COLS).then_some((row, col))
}

/// Owns the grid state and applies events to it.
#[derive(Debug, Default)]
pub struct Surface {
    state: GridState,
}

impl Surface {
    pub fn new(state: GridState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Applies one event. Returns true when the canvas needs a repaint.
    pub fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::CanvasClick { x, y } => self.on_canvas_click(x, y),
            Event::Direction(button) => {
                self.on_direction_button(button);
                true
            }
            Event::Tick => {
                self.state.step();
                true
            }
        }
    }

    fn on_canvas_click(&mut self, x: i32, y: i32) -> bool {
        match pixel_to_cell(x, y) {
            Some((row, col)) => {
                self.state.toggle_cell(row, col);
                tracing::debug!(row, col, alive = self.state.is_alive(row, col), "toggled cell");
                true
            }
            None => {
                tracing::debug!(x, y, "click outside grid ignored");
                false
            }
        }
    }

    // Steers and steps once.
    fn on_direction_button(&mut self, button: Button) {
        let direction = button.direction();
        tracing::info!(button = button.label(), ?direction, "direction changed");
        self.state.set_direction(direction);
        self.state.advance(direction);
    }
}
