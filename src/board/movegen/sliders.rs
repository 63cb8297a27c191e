use super::super::{MoveList, Piece, Position, Square};

impl Position {
    /// Walk each ray until the board edge or the first occupied square,
    /// which is included only when it holds an enemy piece.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        piece: Piece,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                if !self.push_step(from, to, piece, moves) {
                    break;
                }
                current = to;
            }
        }
    }
}
