use crate::zobrist::ZOBRIST;

use super::{CastleSide, CastlingRights, Color, Piece, Square};

/// Contents of one square.
pub type Cell = Option<(Color, Piece)>;

/// What a renderer needs to draw one occupied square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareView {
    pub piece: Piece,
    pub color: Color,
    pub glyph: char,
}

/// Renderable 8x8 grid indexed `[rank][file]`, rank 0 being White's back rank.
pub type BoardSnapshot = [[Option<SquareView>; 8]; 8];

/// Complete rules state of a chess position.
///
/// A `Position` is a plain value: cloning it yields a fully independent copy,
/// which is how the legality filter and the search explore moves without
/// touching the caller's state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// `[rank][file]`
    pub(crate) squares: [[Cell; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.into_iter().enumerate() {
            position.set_piece(Square(0, file), Color::White, piece);
            position.set_piece(Square(1, file), Color::White, Piece::Pawn);
            position.set_piece(Square(6, file), Color::Black, Piece::Pawn);
            position.set_piece(Square(7, file), Color::Black, piece);
        }
        position.castling_rights = CastlingRights::all();
        position
    }

    /// A board with no pieces, White to move and no castling rights.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.squares[sq.rank()][sq.file()]
    }

    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Put a piece on a square, replacing whatever was there.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.rank()][sq.file()] = Some((color, piece));
    }

    /// Empty a square, returning what stood on it.
    #[inline]
    pub fn clear_square(&mut self, sq: Square) -> Cell {
        self.squares[sq.rank()][sq.file()].take()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Occupied squares with their contents, in board-scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::scan_order()
            .filter_map(move |sq| self.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// Fingerprint of board, side to move, castling rights and en-passant
    /// target. Clocks are not part of the key.
    #[must_use]
    pub fn key(&self) -> u64 {
        let mut key = 0u64;
        for (sq, color, piece) in self.pieces() {
            key ^= ZOBRIST.piece(color, piece, sq);
        }
        if self.side_to_move == Color::Black {
            key ^= ZOBRIST.black_to_move_key;
        }
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if self.castling_rights.has(color, side) {
                    key ^= ZOBRIST.castling(color, side);
                }
            }
        }
        if let Some(ep) = self.en_passant_target {
            key ^= ZOBRIST.en_passant(ep);
        }
        key
    }

    /// Renderable view of the board for a presentation layer.
    #[must_use]
    pub fn board_snapshot(&self) -> BoardSnapshot {
        let mut grid = [[None; 8]; 8];
        for (sq, color, piece) in self.pieces() {
            grid[sq.rank()][sq.file()] = Some(SquareView {
                piece,
                color,
                glyph: piece.glyph(color),
            });
        }
        grid
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
