use super::Player;
use crate::error::GameError;

/// Pieces in a line needed to win, and so the smallest usable board side.
pub const CONNECT: usize = 4;
pub const MIN_DIMENSION: usize = CONNECT;
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn occupant(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The grid of cells, stored row-major. Row 0 is the top, row `height - 1`
/// the bottom; pieces fall towards higher row indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of `height` rows by `width` columns.
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        let invalid = GameError::InvalidDimensions { height, width };
        if height < MIN_DIMENSION || width < MIN_DIMENSION {
            return Err(invalid);
        }
        // The cell count must fit a single allocation.
        let max_cells = isize::MAX as usize / std::mem::size_of::<Cell>();
        match height.checked_mul(width) {
            Some(cells) if cells <= max_cells => Ok(Self::empty(height, width)),
            _ => Err(invalid),
        }
    }

    /// Unchecked constructor; callers guarantee the dimensions are valid.
    fn empty(height: usize, width: usize) -> Self {
        Board {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    fn check_column(&self, col: usize) -> Result<(), GameError> {
        if col >= self.width {
            return Err(GameError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Get the cell at a position, or `None` when it lies off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// The player occupying a position. Off-board positions read as empty.
    pub fn occupant_at(&self, row: usize, col: usize) -> Option<Player> {
        self.get(row, col).and_then(Cell::occupant)
    }

    /// Find the row a piece dropped into `col` would land on: the lowest
    /// empty row, or `None` if the column is full.
    pub fn landing_row(&self, col: usize) -> Result<Option<usize>, GameError> {
        self.check_column(col)?;
        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col].is_empty()))
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        match self.get(0, col) {
            Some(cell) => !cell.is_empty(),
            None => true,
        }
    }

    /// Occupy an empty cell.
    ///
    /// Callers resolve the position through [`Board::landing_row`] first;
    /// placing onto an occupied or off-board cell is a logic error.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        let idx = self.index(row, col).unwrap_or_else(|| {
            panic!(
                "place({row}, {col}) is off a {}x{} board",
                self.height, self.width
            )
        });
        debug_assert!(
            self.cells[idx].is_empty(),
            "cell ({row}, {col}) is already occupied"
        );
        self.cells[idx] = Cell::Occupied(player);
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
