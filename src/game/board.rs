#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// Connection-game board with configurable dimensions.
///
/// Row 0 is the top, row `rows - 1` is the bottom. Column fill is
/// gravity-ordered: a cell is occupied only if every cell below it in the
/// same column is occupied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,

    #[error("column out of range")]
    InvalidColumn,

    #[error("game is already over")]
    GameOver,
}

impl Board {
    /// Create a new empty board with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The center column, used for positional bonuses and move ordering.
    pub fn center_col(&self) -> usize {
        self.cols / 2
    }

    /// Get the cell at a specific position.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Check if a column is full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..self.rows).rev() {
            if self.get(row, col) == Cell::Empty {
                self.cells[row * self.cols + col] = cell;
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Check if four consecutive cells of `cell` exist in any row, column,
    /// or diagonal. Full-board scan, time proportional to board size.
    pub fn is_win(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }

        // Horizontal
        for row in 0..self.rows {
            for col in 0..self.cols.saturating_sub(3) {
                if (0..4).all(|i| self.get(row, col + i) == cell) {
                    return true;
                }
            }
        }

        // Vertical
        for col in 0..self.cols {
            for row in 0..self.rows.saturating_sub(3) {
                if (0..4).all(|i| self.get(row + i, col) == cell) {
                    return true;
                }
            }
        }

        // Diagonal (top-left to bottom-right, \)
        for row in 0..self.rows.saturating_sub(3) {
            for col in 0..self.cols.saturating_sub(3) {
                if (0..4).all(|i| self.get(row + i, col + i) == cell) {
                    return true;
                }
            }
        }

        // Diagonal (bottom-left to top-right, /)
        for row in 3..self.rows {
            for col in 0..self.cols.saturating_sub(3) {
                if (0..4).all(|i| self.get(row - i, col + i) == cell) {
                    return true;
                }
            }
        }

        false
    }

    /// Return a board with the two sides' pieces exchanged.
    pub fn swap_sides(&self) -> Board {
        let cells = self
            .cells
            .iter()
            .map(|c| match c {
                Cell::Red => Cell::Yellow,
                Cell::Yellow => Cell::Red,
                Cell::Empty => Cell::Empty,
            })
            .collect();
        Board {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }
}
