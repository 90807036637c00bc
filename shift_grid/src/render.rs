// render.rs - Full repaint of the grid onto any 2D drawing surface

use egui::Color32;

use crate::config::Palette;
use crate::grid::{CELL_SIZE, NUM_COLS, NUM_ROWS, TGrid};

/// Minimal drawing surface. Coordinates are pixels from the canvas top-left.
pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color32);
    fn line(&mut self, from: [f32; 2], to: [f32; 2], color: Color32);
}

/// Paints every cell, then the separator lines just inside each cell's
/// right and bottom edge.
pub fn render<C: Canvas + ?Sized>(grid: &TGrid, palette: &Palette, canvas: &mut C) {
    let cell = CELL_SIZE as f32;
    let width = (NUM_COLS * CELL_SIZE) as f32;
    let height = (NUM_ROWS * CELL_SIZE) as f32;

    // Cells
    for (row, cells) in grid.iter().enumerate() {
        for (col, &alive) in cells.iter().enumerate() {
            let color = if alive { palette.alive } else { palette.dead };
            canvas.fill_rect(col as f32 * cell, row as f32 * cell, cell, cell, color);
        }
    }

    // Horizontal lines
    for row in 0..NUM_ROWS {
        let y = ((row + 1) * CELL_SIZE - 1) as f32;
        canvas.line([0.0, y], [width, y], palette.line);
    }

    // Vertical lines
    for col in 0..NUM_COLS {
        let x = ((col + 1) * CELL_SIZE - 1) as f32;
        canvas.line([x, 0.0], [x, height], palette.line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridState;

    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Fill { x: f32, y: f32, w: f32, h: f32, color: Color32 },
        Line { from: [f32; 2], to: [f32; 2], color: Color32 },
    }

    #[derive(Default)]
    struct RecordingCanvas {
        calls: Vec<DrawCall>,
    }

    impl Canvas for RecordingCanvas {
        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color32) {
            self.calls.push(DrawCall::Fill { x, y, w, h, color });
        }

        fn line(&mut self, from: [f32; 2], to: [f32; 2], color: Color32) {
            self.calls.push(DrawCall::Line { from, to, color });
        }
    }

    fn draw(state: &GridState) -> Vec<DrawCall> {
        let mut canvas = RecordingCanvas::default();
        render(state.grid(), &Palette::default(), &mut canvas);
        canvas.calls
    }

    #[test]
    fn cells_then_rows_then_columns() {
        let calls = draw(&GridState::default());
        assert_eq!(calls.len(), NUM_ROWS * NUM_COLS + NUM_ROWS + NUM_COLS);

        let fills = &calls[..NUM_ROWS * NUM_COLS];
        assert!(fills.iter().all(|c| matches!(c, DrawCall::Fill { .. })));

        let lines = &calls[NUM_ROWS * NUM_COLS..];
        assert!(lines.iter().all(|c| matches!(c, DrawCall::Line { color, .. } if *color == Color32::BLACK)));
    }

    #[test]
    fn alive_cell_painted_olive_at_its_offset() {
        let palette = Palette::default();
        let calls = draw(&GridState::from_cells(&[(2, 3)]));

        let index = 2 * NUM_COLS + 3;
        assert_eq!(
            calls[index],
            DrawCall::Fill { x: 60.0, y: 40.0, w: 20.0, h: 20.0, color: palette.alive }
        );
        assert_eq!(
            calls[0],
            DrawCall::Fill { x: 0.0, y: 0.0, w: 20.0, h: 20.0, color: palette.dead }
        );

        let olive = calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Fill { color, .. } if *color == palette.alive))
            .count();
        assert_eq!(olive, 1);
    }

    #[test]
    fn separator_lines_sit_one_pixel_inside_cell_edge() {
        let calls = draw(&GridState::default());
        let first_row_line = &calls[NUM_ROWS * NUM_COLS];
        let last_col_line = calls.last().cloned();

        assert_eq!(
            *first_row_line,
            DrawCall::Line { from: [0.0, 19.0], to: [500.0, 19.0], color: Color32::BLACK }
        );
        assert_eq!(
            last_col_line,
            Some(DrawCall::Line { from: [499.0, 0.0], to: [499.0, 500.0], color: Color32::BLACK })
        );
    }
}
