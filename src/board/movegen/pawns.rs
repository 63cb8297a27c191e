use super::super::{MoveKind, MoveList, Piece, Position, Square, PROMOTION_PIECES};

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                if forward.rank() == promotion_rank {
                    self.push_promotions(from, forward, moves);
                } else {
                    moves.push(self.create_move(from, forward, Piece::Pawn, None, MoveKind::Normal));
                    if from.rank() == color.pawn_start_rank() {
                        if let Some(double) = forward.offset(dir, 0) {
                            if self.is_empty(double) {
                                moves.push(self.create_move(
                                    from,
                                    double,
                                    Piece::Pawn,
                                    None,
                                    MoveKind::DoublePawnPush,
                                ));
                            }
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target) {
                Some((target_color, _)) if target_color != color => {
                    if target.rank() == promotion_rank {
                        self.push_promotions(from, target, moves);
                    } else {
                        moves.push(self.create_move(from, target, Piece::Pawn, None, MoveKind::Normal));
                    }
                }
                None if self.en_passant_target == Some(target)
                    && self.piece_at(Square(from.rank(), target.file()))
                        == Some((color.opponent(), Piece::Pawn)) =>
                {
                    moves.push(self.create_move(from, target, Piece::Pawn, None, MoveKind::EnPassant));
                }
                _ => {}
            }
        }
    }

    fn push_promotions(&self, from: Square, to: Square, moves: &mut MoveList) {
        for promo in PROMOTION_PIECES {
            moves.push(self.create_move(from, to, Piece::Pawn, Some(promo), MoveKind::Normal));
        }
    }
}
