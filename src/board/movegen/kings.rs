use super::super::{CastleSide, MoveKind, MoveList, Piece, Position, Square};
use super::{castling_path, KING_OFFSETS};

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        for (dr, df) in KING_OFFSETS {
            if let Some(to) = from.offset(dr, df) {
                self.push_step(from, to, Piece::King, moves);
            }
        }

        for side in CastleSide::BOTH {
            if self.can_castle(from, side) {
                let to = Square(from.rank(), side.king_to_file());
                moves.push(self.create_move(from, to, Piece::King, None, MoveKind::Castle(side)));
            }
        }
    }

    /// Castling needs the right flag, the king and rook on their home squares,
    /// nothing between them, and no attacked square on the king's path. The
    /// departure square is on that path, so a king in check cannot castle.
    fn can_castle(&self, king_from: Square, side: CastleSide) -> bool {
        let color = self.side_to_move;
        let rank = color.back_rank();
        if !self.castling_rights.has(color, side) || king_from != Square(rank, 4) {
            return false;
        }
        if self.piece_at(side.rook_home(color)) != Some((color, Piece::Rook)) {
            return false;
        }

        let (lo, hi) = match side {
            CastleSide::Kingside => (5, 6),
            CastleSide::Queenside => (1, 3),
        };
        if (lo..=hi).any(|file| !self.is_empty(Square(rank, file))) {
            return false;
        }

        let attacker = color.opponent();
        castling_path(color, side)
            .iter()
            .all(|&sq| !self.is_square_attacked(sq, attacker))
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::{CastleSide, Position, Square};

    fn castle_sides(fen: &str) -> Vec<CastleSide> {
        let position = Position::from_fen(fen).unwrap();
        let king = position.king_square(position.side_to_move()).unwrap();
        position
            .pseudo_legal_moves_from(king)
            .iter()
            .filter_map(|m| m.castle_side())
            .collect()
    }

    #[test]
    fn test_both_sides_available() {
        let sides = castle_sides("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(sides, vec![CastleSide::Kingside, CastleSide::Queenside]);
        let sides = castle_sides("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        assert_eq!(sides, vec![CastleSide::Kingside, CastleSide::Queenside]);
    }

    #[test]
    fn test_no_castling_without_rights() {
        assert!(castle_sides("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1").is_empty());
    }

    #[test]
    fn test_no_castling_through_blockers() {
        let sides = castle_sides("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1");
        assert!(sides.is_empty());
    }

    #[test]
    fn test_no_castling_out_of_check() {
        // Black rook on e8 file gives check along the e-file
        assert!(castle_sides("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
    }

    #[test]
    fn test_no_castling_through_attacked_square() {
        // f1 covered by the rook on f8: kingside gone, queenside fine
        let sides = castle_sides("5rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert_eq!(sides, vec![CastleSide::Queenside]);
    }

    #[test]
    fn test_queenside_b_file_attack_allowed() {
        // b1 is attacked but the king never crosses it
        let sides = castle_sides("1r4k1/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert_eq!(sides, vec![CastleSide::Queenside]);
    }

    #[test]
    fn test_castle_move_lands_on_g_file() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        let moves = position.pseudo_legal_moves_from(Square(0, 4));
        let castle = moves.iter().find(|m| m.is_castling()).unwrap();
        assert_eq!(castle.to, Square(0, 6));
        assert_eq!(castle.captured, None);
    }
}
