use super::super::{MoveList, Piece, Position, Square};
use super::KNIGHT_OFFSETS;

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        for (dr, df) in KNIGHT_OFFSETS {
            if let Some(to) = from.offset(dr, df) {
                self.push_step(from, to, Piece::Knight, moves);
            }
        }
    }
}
