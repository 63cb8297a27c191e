//! Core chess types.
//!
//! This module contains the fundamental value types shared by the rules
//! engine, the notation codecs and the search:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (rank, file) board coordinate
//! - `Move`, `MoveKind` and `MoveList` - move representation
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind, MoveList};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
