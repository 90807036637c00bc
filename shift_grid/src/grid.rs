// grid.rs - Grid state for the shifting cell pattern

use rand::Rng;

use crate::error::GridError;

// Compile-time grid size configuration
pub const NUM_ROWS: usize = 25;                       // Rows in the playing area
pub const NUM_COLS: usize = 25;                       // Columns in the playing area
pub const CELL_SIZE: usize = 20;                      // Cell edge in pixels

pub type TRow = [bool; NUM_COLS];
pub type TGrid = [TRow; NUM_ROWS];

/// One of the five legal translation vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Still,  // ( 0,  0)
    Down,   // ( 1,  0)
    Up,     // (-1,  0)
    Left,   // ( 0, -1)
    Right,  // ( 0,  1)
}

impl Direction {
    /// The `(d_row, d_col)` pair applied by `advance`.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Still => (0, 0),
            Direction::Down  => (1, 0),
            Direction::Up    => (-1, 0),
            Direction::Left  => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn from_delta(d_row: isize, d_col: isize) -> Result<Self, GridError> {
        match (d_row, d_col) {
            (0, 0)  => Ok(Direction::Still),
            (1, 0)  => Ok(Direction::Down),
            (-1, 0) => Ok(Direction::Up),
            (0, -1) => Ok(Direction::Left),
            (0, 1)  => Ok(Direction::Right),
            _       => Err(GridError::InvalidDirection { d_row, d_col }),
        }
    }
}

/// The grid together with the direction it is currently drifting in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    grid: TGrid,
    direction: Direction,
    generation: u32,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            grid: [[false; NUM_COLS]; NUM_ROWS],
            direction: Direction::Still,
            generation: 0,
        }
    }
}

impl GridState {
    /// Empty grid with a single alive cell at a random position.
    pub fn seeded<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut state = Self::default();
        let row = rng.random_range(0..NUM_ROWS);
        let col = rng.random_range(0..NUM_COLS);
        state.grid[row][col] = true;
        tracing::debug!(row, col, "seeded initial cell");
        state
    }

    /// Grid with exactly the listed cells alive. Out-of-range cells are skipped.
    pub fn from_cells(cells: &[(usize, usize)]) -> Self {
        let mut state = Self::default();
        for &(row, col) in cells {
            if row < NUM_ROWS && col < NUM_COLS {
                state.grid[row][col] = true;
            }
        }
        state
    }

    pub fn grid(&self) -> &TGrid {
        &self.grid
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.grid[row][col]
    }

    pub fn alive_count(&self) -> usize {
        self.grid.iter().map(|row| row.iter().filter(|&&cell| cell).count()).sum()
    }

    /// Alive coordinates in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter(|&(_, &alive)| alive).map(move |(col, _)| (row, col))
        })
    }

    /// Flips one cell. Indices must already be inside the grid.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        self.grid[row][col] = !self.grid[row][col];
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Shifts the whole pattern by `direction`, wrapping across the edges.
    pub fn advance(&mut self, direction: Direction) {
        let (d_row, d_col) = direction.delta();
        let mut next_grid = [[false; NUM_COLS]; NUM_ROWS];

        for (row, next_row) in next_grid.iter_mut().enumerate() {
            let src_row = (row as isize - d_row).rem_euclid(NUM_ROWS as isize) as usize;
            for (col, cell) in next_row.iter_mut().enumerate() {
                let src_col = (col as isize - d_col).rem_euclid(NUM_COLS as isize) as usize;
                *cell = self.grid[src_row][src_col];
            }
        }

        self.grid = next_grid;
        self.generation += 1;
    }

    /// One scheduler tick: advance along the stored direction.
    pub fn step(&mut self) {
        self.advance(self.direction);
    }
}
