//! Terminal UI: a thin adapter that turns key presses into engine moves and
//! draws the board and the outcome of each move.

mod app;
mod game_view;

pub use app::App;
