//! Applying a move to a position.

use super::{Color, Move, MoveKind, Piece, Position, Square};

impl Position {
    /// Apply a move generated for this position, without a legality check.
    ///
    /// Handles the en-passant victim, the castling rook, promotion, castling
    /// rights, the en-passant target and both clocks.
    pub(crate) fn apply_move(&mut self, mv: &Move) {
        let color = mv.color;

        self.clear_square(mv.from);
        match mv.kind {
            MoveKind::EnPassant => {
                // Victim sits beside the destination, on the mover's rear side
                let victim = Square(mv.from.rank(), mv.to.file());
                self.clear_square(victim);
            }
            MoveKind::Castle(side) => {
                let rank = color.back_rank();
                self.clear_square(Square(rank, side.rook_from_file()));
                self.set_piece(Square(rank, side.rook_to_file()), color, Piece::Rook);
            }
            MoveKind::Normal | MoveKind::DoublePawnPush => {}
        }
        self.set_piece(mv.to, color, mv.promotion.unwrap_or(mv.piece));

        if mv.piece == Piece::King {
            self.castling_rights.remove_color(color);
        }
        self.castling_rights.remove_for_rook_square(mv.from);
        if mv.captured.is_some() {
            self.castling_rights.remove_for_rook_square(mv.to);
        }

        self.en_passant_target = match mv.kind {
            MoveKind::DoublePawnPush => mv.from.offset(color.pawn_direction(), 0),
            _ => None,
        };

        if mv.piece == Piece::Pawn || mv.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = color.opponent();
    }

    /// The position reached by playing `mv`, leaving `self` untouched.
    #[must_use]
    pub fn after_move(&self, mv: &Move) -> Position {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }
}
