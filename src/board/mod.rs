//! Chess position representation and rules.
//!
//! A [`Position`] is a plain 8×8 grid plus side to move, castling rights,
//! en-passant target and the two clocks. It knows how to generate moves,
//! filter them for legality, detect terminal states, read and write FEN and
//! SAN, and score itself statically. It keeps no history; that lives in
//! [`crate::game::Game`].
//!
//! # Example
//! ```
//! use chess_game::board::Position;
//!
//! let position = Position::new();
//! let moves = position.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod apply;
mod builder;
mod error;
mod eval;
mod fen;
mod legality;
mod movegen;
pub mod prelude;
mod san;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, PgnError, SanError, SquareError};
pub use eval::{evaluate, pst_value, MOBILITY_WEIGHT};
pub use fen::STARTING_FEN;
pub use state::{BoardSnapshot, Cell, Position, SquareView};
pub use status::{GameResult, Outcome, Reason, FIFTY_MOVE_PLIES};
pub use types::{CastleSide, CastlingRights, Color, Move, MoveKind, MoveList, Piece, Square};

pub(crate) use types::PROMOTION_PIECES;
