//! Static evaluation: material, piece-square tables and mobility.
//!
//! Scores are in centipawns and always from White's point of view.

use super::{Color, Piece, Position, Square};

/// Centipawns per legal move available to the side to move.
pub const MOBILITY_WEIGHT: i32 = 5;

// Tables are laid out as seen from White: the first row is rank 8, the last
// row rank 1. Black pieces read them mirrored vertically.
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
    50,  50,  50,  50,  50,  50,  50,  50,
    10,  10,  20,  30,  30,  20,  10,  10,
     5,   5,  10,  25,  25,  10,   5,   5,
     0,   0,   0,  20,  20,   0,   0,   0,
     5,  -5, -10,   0,   0, -10,  -5,   5,
     5,  10,  10, -20, -20,  10,  10,   5,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     5,  10,  10,  10,  10,  10,  10,   5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
     0,   0,   0,   5,   5,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,   5,   5,   5,   0, -10,
     -5,   0,   5,   5,   5,   5,   0,  -5,
      0,   0,   5,   5,   5,   5,   0,  -5,
    -10,   5,   5,   5,   5,   5,   0, -10,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

// Middlegame king: stay behind the pawn shield, away from the centre.
#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -10, -20, -20, -20, -20, -20, -20, -10,
     20,  20,   0,   0,   0,   0,  20,  20,
     20,  30,  10,   0,   0,  10,  30,  20,
];

const PST: [[i32; 64]; 6] = [
    PAWN_TABLE,
    KNIGHT_TABLE,
    BISHOP_TABLE,
    ROOK_TABLE,
    QUEEN_TABLE,
    KING_TABLE,
];

/// Piece-square bonus for `piece` of `color` standing on `sq`.
#[must_use]
pub fn pst_value(piece: Piece, color: Color, sq: Square) -> i32 {
    let sq = match color {
        Color::White => sq,
        Color::Black => sq.flip_vertical(),
    };
    PST[piece.index()][(7 - sq.rank()) * 8 + sq.file()]
}

/// Material value counted by the evaluator. Kings never leave the board, so
/// they contribute nothing here.
const fn material(piece: Piece) -> i32 {
    match piece {
        Piece::King => 0,
        other => other.value(),
    }
}

impl Position {
    /// Static score of this position, positive when White stands better.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.evaluate_with_mobility(self.legal_moves().len())
    }

    /// Evaluation when the caller already counted the legal moves.
    pub(crate) fn evaluate_with_mobility(&self, legal_moves: usize) -> i32 {
        let placement: i32 = self
            .pieces()
            .map(|(sq, color, piece)| {
                color.sign() * (material(piece) + pst_value(piece, color, sq))
            })
            .sum();

        let mobility = legal_moves as i32 * MOBILITY_WEIGHT;
        placement + self.side_to_move.sign() * mobility
    }
}

/// Free-function form of [`Position::evaluate`].
#[must_use]
pub fn evaluate(position: &Position) -> i32 {
    position.evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_is_balanced_apart_from_mobility() {
        let position = Position::new();
        assert_eq!(evaluate(&position), 20 * MOBILITY_WEIGHT);

        let black_to_move =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1").unwrap();
        assert_eq!(evaluate(&black_to_move), -20 * MOBILITY_WEIGHT);
    }

    #[test]
    fn test_extra_queen_dominates() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        assert!(evaluate(&position) > 800);
        let position = Position::from_fen("3qk3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(evaluate(&position) < -800);
    }

    #[test]
    fn test_tables_mirror_for_black() {
        let e2 = Square(1, 4);
        let e7 = Square(6, 4);
        for piece in Piece::ALL {
            assert_eq!(
                pst_value(piece, Color::White, e2),
                pst_value(piece, Color::Black, e7)
            );
        }
    }

    #[test]
    fn test_tables_reward_canonical_squares() {
        // Centralised knight beats a cornered one
        assert!(
            pst_value(Piece::Knight, Color::White, Square(3, 3))
                > pst_value(Piece::Knight, Color::White, Square(0, 0))
        );
        // Advanced pawn beats a home pawn
        assert!(
            pst_value(Piece::Pawn, Color::White, Square(6, 0))
                > pst_value(Piece::Pawn, Color::White, Square(1, 0))
        );
        // Castled king beats a central king
        assert!(
            pst_value(Piece::King, Color::White, Square(0, 6))
                > pst_value(Piece::King, Color::White, Square(3, 4))
        );
    }

    #[test]
    fn test_mirrored_position_negates_placement() {
        let white = Position::from_fen("4k3/8/8/3N4/8/8/8/4K3 w - - 0 1").unwrap();
        let black = Position::from_fen("4k3/8/8/8/3n4/8/8/4K3 b - - 0 1").unwrap();
        assert_eq!(evaluate(&white), -evaluate(&black));
    }
}
