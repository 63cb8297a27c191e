//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_game::board::{Color, Piece, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
//! ```

use super::error::FenError;
use super::{CastleSide, CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    position: Position,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Start from an empty board, White to move, no castling rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            position: Position::empty(),
        }
    }

    /// Start from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            position: Position::new(),
        }
    }

    /// Place a piece, replacing whatever stood on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.position.set_piece(square, color, piece);
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.position.clear_square(square);
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.position.side_to_move = color;
        self
    }

    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.position.castling_rights = rights;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.position.castling_rights.set(color, side);
        self
    }

    #[must_use]
    pub fn en_passant(mut self, target: Square) -> Self {
        self.position.en_passant_target = Some(target);
        self
    }

    /// Set the halfmove clock (for the fifty-move rule).
    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.position.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub fn fullmove_number(mut self, number: u32) -> Self {
        self.position.fullmove_number = number.max(1);
        self
    }

    /// Build without validation.
    #[must_use]
    pub fn build(self) -> Position {
        self.position
    }

    /// Build, requiring exactly one king per side.
    pub fn try_build(self) -> Result<Position, FenError> {
        for color in Color::BOTH {
            let found = self
                .position
                .pieces()
                .filter(|&(_, c, p)| c == color && p == Piece::King)
                .count();
            if found != 1 {
                return Err(FenError::KingCount { color, found });
            }
        }
        Ok(self.position)
    }
}
