//! Core Connect Four rules: board representation, contestant identity,
//! seeded win detection, and the turn-taking state machine.

mod board;
mod detect;
mod player;
mod state;

pub use board::{Board, Cell, MoveError, DEFAULT_COLS, DEFAULT_ROWS};
pub use detect::{has_win_at, CONNECT};
pub use player::{Player, Side};
pub use state::{GameState, Outcome};
