//! Core Connect Four game logic: board representation, player identities, and
//! the game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH, WIN_LENGTH};
pub use player::Player;
pub use state::{GameResult, GameState, MoveOutcome, Placement};
