//! Chess rules, notation and a small alpha-beta AI.
//!
//! - [`board`]: positions, move generation, legality, game-state predicates,
//!   FEN/SAN and static evaluation
//! - [`game`]: one game with history, undo, repetition, results and PGN
//! - [`search`]: minimax move search, difficulty levels and background requests

pub mod board;
pub mod game;
pub mod search;
pub mod sync;
mod zobrist;

pub use board::{Color, Move, Piece, Position, Square};
pub use game::Game;
