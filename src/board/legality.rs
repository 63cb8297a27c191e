//! Attack detection and the legality filter.

use super::movegen::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use super::{Color, Move, MoveList, Piece, Position, Square};

impl Position {
    /// Whether any piece of `by` attacks `square`.
    ///
    /// Works outward from the target: knight hops, adjacent king, the two
    /// pawn-capture diagonals, then the first piece met along each ray. The
    /// same routine backs check detection and castling-path validation.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        let is = |sq: Square, piece: Piece| self.piece_at(sq) == Some((by, piece));

        if KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, df)| square.offset(dr, df))
            .any(|sq| is(sq, Piece::Knight))
        {
            return true;
        }

        if KING_OFFSETS
            .iter()
            .filter_map(|&(dr, df)| square.offset(dr, df))
            .any(|sq| is(sq, Piece::King))
        {
            return true;
        }

        // A pawn of `by` attacks from one rank behind, relative to its own direction
        let pawn_rank_step = -by.pawn_direction();
        if [-1, 1]
            .iter()
            .filter_map(|&df| square.offset(pawn_rank_step, df))
            .any(|sq| is(sq, Piece::Pawn))
        {
            return true;
        }

        self.slider_attacks(square, by, &ROOK_DIRECTIONS, Piece::Rook)
            || self.slider_attacks(square, by, &BISHOP_DIRECTIONS, Piece::Bishop)
    }

    fn slider_attacks(
        &self,
        square: Square,
        by: Color,
        directions: &[(isize, isize)],
        slider: Piece,
    ) -> bool {
        for &(dr, df) in directions {
            let mut current = square;
            while let Some(next) = current.offset(dr, df) {
                if let Some((color, piece)) = self.piece_at(next) {
                    if color == by && (piece == slider || piece == Piece::Queen) {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
        false
    }

    /// Whether `color`'s king is attacked. A side without a king is never
    /// in check.
    #[must_use]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// A pseudo-legal move is legal when it does not leave the mover's own
    /// king attacked.
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        let mut scratch = self.clone();
        scratch.apply_move(mv);
        !scratch.is_king_attacked(mv.color)
    }

    /// Every legal move for the side to move, in generation order.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = self.pseudo_legal_moves();
        moves.retain(|m| self.is_legal(m));
        moves
    }

    /// Legal moves of the piece standing on `from`.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        let mut moves = self.pseudo_legal_moves_from(from);
        moves.retain(|m| self.is_legal(m));
        moves
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .iter()
            .map(|mv| self.after_move(mv).perft(depth - 1))
            .sum()
    }

    /// Per-root-move perft counts, in generation order.
    #[must_use]
    pub fn perft_divide(&self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        self.legal_moves()
            .into_iter()
            .map(|mv| (mv, self.after_move(&mv).perft(depth - 1)))
            .collect()
    }
}
