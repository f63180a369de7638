use tracing::{debug, info, instrument, warn};

use super::board::Board;
use super::win::{self, WinningLine};
use super::Player;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

/// Result of a single [`GameEngine::drop_piece`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Piece placed, game continues with the other player.
    Placed {
        row: usize,
        column: usize,
        player: Player,
    },
    /// Column has no empty cell. Nothing changed.
    ColumnFull,
    /// The game already ended. Nothing changed.
    GameAlreadyOver,
    /// Piece placed and completed a line of four.
    Won {
        player: Player,
        row: usize,
        column: usize,
    },
    /// Piece placed into the last empty cell without completing a line.
    Tied,
}

impl MoveOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Won { .. } | MoveOutcome::Tied)
    }
}

/// A piece that was placed, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// One game of Connect Four: the board, whose turn it is, and how it ended.
///
/// All state changes go through [`GameEngine::drop_piece`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    active: Player,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    moves: Vec<Move>,
}

impl GameEngine {
    /// Start a game on an empty `height` x `width` board with `first` to move.
    ///
    /// `Player` has exactly two values, so naming the first player fixes the
    /// pair: the second is always `first.other()`.
    #[instrument]
    pub fn new(first: Player, height: usize, width: usize) -> Result<Self, GameError> {
        let board = Board::new(height, width)?;
        debug!("new game");
        Ok(Self::start(board, first))
    }

    fn start(board: Board, first: Player) -> Self {
        GameEngine {
            board,
            players: [first, first.other()],
            active: first,
            status: GameStatus::InProgress,
            winning_line: None,
            moves: Vec::new(),
        }
    }

    /// Drop the active player's piece into `column`.
    ///
    /// An out-of-range column is a caller error. A full column or a finished
    /// game is reported through the outcome and leaves everything unchanged.
    #[instrument(level = "debug", skip(self), fields(player = ?self.active))]
    pub fn drop_piece(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            warn!("move rejected, game is over");
            return Ok(MoveOutcome::GameAlreadyOver);
        }

        let Some(row) = self.board.landing_row(column)? else {
            warn!("move rejected, column is full");
            return Ok(MoveOutcome::ColumnFull);
        };

        let player = self.active;
        self.board.place(row, column, player);
        self.moves.push(Move {
            row,
            column,
            player,
        });
        debug!(row, "piece placed");

        // A win on the last empty cell is still a win.
        if let Some(line) = win::find_win_through(&self.board, row, column) {
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line);
            info!(?player, moves = self.moves.len(), "game won");
            return Ok(MoveOutcome::Won {
                player,
                row,
                column,
            });
        }

        if self.board.is_full() {
            self.status = GameStatus::Tied;
            info!(moves = self.moves.len(), "game tied");
            return Ok(MoveOutcome::Tied);
        }

        self.active = player.other();
        Ok(MoveOutcome::Placed {
            row,
            column,
            player,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The two players in turn order; the first entry moved first.
    pub fn players(&self) -> [Player; 2] {
        self.players
    }

    /// The player whose turn it is. After the game ends this stays on the
    /// player who made the final move.
    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn occupant_at(&self, row: usize, column: usize) -> Option<Player> {
        self.board.occupant_at(row, column)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// The four cells that won the game, if it was won.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Every placed piece, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Columns that still accept a piece. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }
}

impl Default for GameEngine {
    /// A standard 6x7 game with [`Player::One`] to move.
    fn default() -> Self {
        Self::start(Board::default(), Player::One)
    }
}
