//! Pseudo-legal move generation.
//!
//! Moves are enumerated in a fixed order: origin squares in board-scan order
//! (rank 8 to rank 1, files a to h), then each piece's own direction/offset
//! order. SAN disambiguation and the search's tie-breaking both depend on
//! this order staying stable.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{CastleSide, Color, Move, MoveKind, MoveList, Piece, Position, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, -1),
    (2, 1),
    (1, -2),
    (1, 2),
    (-1, -2),
    (-1, 2),
    (-2, -1),
    (-2, 1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Position {
    /// Every pseudo-legal move for the side to move.
    ///
    /// These obey piece movement rules (castling included, with its
    /// attacked-path checks) but may leave the mover's own king in check.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;
        for (from, owner, piece) in self.pieces() {
            if owner == color {
                self.generate_piece_moves(from, piece, &mut moves);
            }
        }
        moves
    }

    /// Pseudo-legal moves of the side to move starting on `from`.
    ///
    /// Empty when the square is empty or holds an opposing piece.
    #[must_use]
    pub fn pseudo_legal_moves_from(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        if let Some((color, piece)) = self.piece_at(from) {
            if color == self.side_to_move {
                self.generate_piece_moves(from, piece, &mut moves);
            }
        }
        moves
    }

    fn generate_piece_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, moves),
            Piece::Knight => self.generate_knight_moves(from, moves),
            Piece::Bishop => self.generate_sliding_moves(from, Piece::Bishop, &BISHOP_DIRECTIONS, moves),
            Piece::Rook => self.generate_sliding_moves(from, Piece::Rook, &ROOK_DIRECTIONS, moves),
            Piece::Queen => self.generate_sliding_moves(from, Piece::Queen, &QUEEN_DIRECTIONS, moves),
            Piece::King => self.generate_king_moves(from, moves),
        }
    }

    /// Build a move for the side to move, reading the capture from the board.
    pub(crate) fn create_move(
        &self,
        from: Square,
        to: Square,
        piece: Piece,
        promotion: Option<Piece>,
        kind: MoveKind,
    ) -> Move {
        let captured = match kind {
            MoveKind::EnPassant => Some(Piece::Pawn),
            MoveKind::Castle(_) => None,
            MoveKind::Normal | MoveKind::DoublePawnPush => self.piece_on(to),
        };
        Move {
            from,
            to,
            piece,
            color: self.side_to_move,
            captured,
            promotion,
            kind,
        }
    }

    /// Push a simple step onto `to` unless a friendly piece stands there.
    /// Returns whether the square was empty (a slider may keep going).
    fn push_step(&self, from: Square, to: Square, piece: Piece, moves: &mut MoveList) -> bool {
        match self.piece_at(to) {
            None => {
                moves.push(self.create_move(from, to, piece, None, MoveKind::Normal));
                true
            }
            Some((color, _)) => {
                if color != self.side_to_move {
                    moves.push(self.create_move(from, to, piece, None, MoveKind::Normal));
                }
                false
            }
        }
    }
}

/// Squares the king crosses when castling, departure and destination included.
pub(crate) fn castling_path(color: Color, side: CastleSide) -> [Square; 3] {
    let rank = color.back_rank();
    match side {
        CastleSide::Kingside => [Square(rank, 4), Square(rank, 5), Square(rank, 6)],
        CastleSide::Queenside => [Square(rank, 4), Square(rank, 3), Square(rank, 2)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_pseudo_moves() {
        let position = Position::new();
        let moves = position.pseudo_legal_moves();
        assert_eq!(moves.len(), 20);
        // Scan starts on rank 8, so White's first origin is the a2 pawn
        assert_eq!(moves[0].from, Square(1, 0));
    }

    #[test]
    fn test_moves_from_respects_side_to_move() {
        let position = Position::new();
        assert_eq!(position.pseudo_legal_moves_from(Square(0, 6)).len(), 2);
        assert!(position.pseudo_legal_moves_from(Square(7, 6)).is_empty());
        assert!(position.pseudo_legal_moves_from(Square(4, 4)).is_empty());
    }

    #[test]
    fn test_generation_order_is_deterministic() {
        let position =
            Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
                .unwrap();
        assert_eq!(position.pseudo_legal_moves(), position.pseudo_legal_moves());
    }
}
