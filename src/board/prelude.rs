//! Prelude module for convenient imports.
//!
//! Re-exports the types most callers need to drive a game.
//!
//! # Example
//! ```
//! use chess_game::board::prelude::*;
//!
//! let mut game = Game::new();
//! game.make_move("e4").unwrap();
//! assert_eq!(game.position().side_to_move(), Color::Black);
//! ```

pub use super::{
    evaluate, CastleSide, Color, FenError, GameResult, Move, MoveError, MoveList, Outcome, Piece,
    PgnError, Position, PositionBuilder, Reason, SanError, Square,
};
pub use crate::game::{Game, MoveInput, PgnMetadata};
pub use crate::search::{request_move, select_move, AiRequest, Difficulty};
