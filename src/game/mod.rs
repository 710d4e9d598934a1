//! Core connection-game logic: board representation, player types, and game
//! state machine with immutable transitions.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, MoveError};
pub use player::Player;
pub use state::{GameOutcome, GameState};
