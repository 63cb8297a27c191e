//! Zobrist constants behind position keys.
//!
//! Keys are recomputed from scratch for every position and feed repetition
//! detection.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastleSide, Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_type][color][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) black_to_move_key: u64,
    // castling_keys[color][side]: 0=Kingside, 1=Queenside
    pub(crate) castling_keys: [[u64; 2]; 2],
    // en_passant_keys[file_index] (only the file matters for the EP target)
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        // Fixed seed: keys are identical across runs
        let mut rng = StdRng::seed_from_u64(0x5EED_C4E5_5000_0001);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        let mut castling_keys = [[0; 2]; 2];
        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        let mut en_passant_keys = [0; 8];
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.as_index()]
    }

    #[inline]
    pub(crate) fn castling(&self, color: Color, side: CastleSide) -> u64 {
        let side_idx = match side {
            CastleSide::Kingside => 0,
            CastleSide::Queenside => 1,
        };
        self.castling_keys[color.index()][side_idx]
    }

    #[inline]
    pub(crate) fn en_passant(&self, sq: Square) -> u64 {
        self.en_passant_keys[sq.file()]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
