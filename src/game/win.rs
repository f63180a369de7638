//! Four-in-a-row detection.
//!
//! A line is [`CONNECT`] consecutive cells starting at an anchor and stepping
//! in one of four directions. [`find_win`] tries every anchor on the board;
//! [`find_win_through`] only tries the lines that pass through one cell, which
//! is all that can change after a single drop. Both agree on whether a win
//! exists.

use super::board::{Board, CONNECT};
use super::Player;

/// Scan direction from an anchor cell, as a `(row, col)` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// →
    Horizontal,
    /// ↓
    Vertical,
    /// ↘
    DiagonalDownRight,
    /// ↙
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Four cells owned by one player, listed from the anchor outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub direction: Direction,
    pub cells: [(usize, usize); CONNECT],
}

impl WinningLine {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

/// Offset a position by `k` steps, or `None` if it leaves the board.
fn offset(
    board: &Board,
    (row, col): (usize, usize),
    (dr, dc): (isize, isize),
    k: isize,
) -> Option<(usize, usize)> {
    let r = row.checked_add_signed(dr * k)?;
    let c = col.checked_add_signed(dc * k)?;
    (r < board.height() && c < board.width()).then_some((r, c))
}

/// The line anchored at `anchor` in `direction`, if it is on the board and
/// every cell belongs to `player`.
fn owned_line(
    board: &Board,
    anchor: (usize, usize),
    direction: Direction,
    player: Player,
) -> Option<WinningLine> {
    let step = direction.step();
    let mut cells = [(0, 0); CONNECT];
    for (k, slot) in cells.iter_mut().enumerate() {
        let (row, col) = offset(board, anchor, step, k as isize)?;
        if board.occupant_at(row, col) != Some(player) {
            return None;
        }
        *slot = (row, col);
    }
    Some(WinningLine {
        player,
        direction,
        cells,
    })
}

/// Check every anchor cell and direction for a line owned by `player`.
pub fn find_win(board: &Board, player: Player) -> Option<WinningLine> {
    for row in 0..board.height() {
        for col in 0..board.width() {
            for direction in Direction::ALL {
                if let Some(line) = owned_line(board, (row, col), direction, player) {
                    return Some(line);
                }
            }
        }
    }
    None
}

/// Check only the lines passing through `(row, col)`, for whoever occupies it.
pub fn find_win_through(board: &Board, row: usize, col: usize) -> Option<WinningLine> {
    let player = board.occupant_at(row, col)?;

    for direction in Direction::ALL {
        let step = direction.step();
        // Slide the anchor back along the line so (row, col) takes each slot.
        for k in 0..CONNECT as isize {
            let Some(anchor) = offset(board, (row, col), step, -k) else {
                break;
            };
            if let Some(line) = owned_line(board, anchor, direction, player) {
                return Some(line);
            }
        }
    }
    None
}
