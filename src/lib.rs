//! # Connect Four
//!
//! Two players take turns dropping pieces into the columns of a grid; a piece
//! falls to the lowest empty row, and the first to line up four in a row,
//! column or diagonal wins. A full board with no line is a draw.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, players, game engine, win detection
//! - [`ui`]: Terminal UI adapter over the engine
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
