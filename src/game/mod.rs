//! Core Connect Four logic: the board and its drop rule, the two players, the
//! turn-by-turn game engine and four-in-a-row detection.

mod board;
mod engine;
mod player;
pub mod win;

pub use board::{Board, Cell, CONNECT, DEFAULT_COLS, DEFAULT_ROWS, MIN_DIMENSION};
pub use engine::{GameEngine, GameStatus, Move, MoveOutcome};
pub use player::Player;
pub use win::{Direction, WinningLine};

