//! Move application: piece placement, castling rights, en passant and clocks.

use super::{find_move, play};
use crate::board::{CastleSide, Color, Piece, Position, Square};

#[test]
fn test_after_move_leaves_original_untouched() {
    let start = Position::new();
    let next = start.after_move(&find_move(&start, "e2e4"));
    assert_eq!(start, Position::new());
    assert_eq!(next.piece_on(Square(3, 4)), Some(Piece::Pawn));
    assert!(next.is_empty(Square(1, 4)));
    assert_eq!(next.side_to_move(), Color::Black);
}

#[test]
fn test_double_push_sets_en_passant_target() {
    let board = play(&Position::new(), &["e2e4"]);
    assert_eq!(board.en_passant_target(), Some(Square(2, 4)));
    assert_eq!(
        board.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

#[test]
fn test_en_passant_target_expires_after_one_ply() {
    let board = play(&Position::new(), &["e2e4", "g8f6"]);
    assert_eq!(board.en_passant_target(), None);
}

#[test]
fn test_en_passant_removes_victim() {
    let board = play(&Position::new(), &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(board.en_passant_target(), Some(Square(5, 3)));
    let capture = find_move(&board, "e5d6");
    assert!(capture.is_en_passant());
    assert_eq!(capture.captured, Some(Piece::Pawn));

    let after = board.after_move(&capture);
    assert_eq!(after.piece_on(Square(5, 3)), Some(Piece::Pawn));
    assert!(after.is_empty(Square(4, 3)));
    assert!(after.is_empty(Square(4, 4)));
    assert_eq!(after.halfmove_clock(), 0);
}

#[test]
fn test_castling_moves_rook() {
    let board = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();

    let short = board.after_move(&find_move(&board, "e1g1"));
    assert_eq!(short.piece_on(Square(0, 6)), Some(Piece::King));
    assert_eq!(short.piece_on(Square(0, 5)), Some(Piece::Rook));
    assert!(short.is_empty(Square(0, 7)));
    assert_eq!(short.castling_rights().to_fen(), "kq");

    let long = board.after_move(&find_move(&board, "e1c1"));
    assert_eq!(long.piece_on(Square(0, 2)), Some(Piece::King));
    assert_eq!(long.piece_on(Square(0, 3)), Some(Piece::Rook));
    assert!(long.is_empty(Square(0, 0)));
}

#[test]
fn test_rook_move_drops_one_right() {
    let board = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let after = play(&board, &["h1h2"]);
    let rights = after.castling_rights();
    assert!(!rights.has(Color::White, CastleSide::Kingside));
    assert!(rights.has(Color::White, CastleSide::Queenside));
    assert_eq!(rights.to_fen(), "Qkq");
}

#[test]
fn test_king_move_drops_both_rights() {
    let board = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let after = play(&board, &["e1e2", "e8e7"]);
    assert_eq!(after.castling_rights().to_fen(), "-");
}

#[test]
fn test_capturing_rook_drops_opponent_right() {
    let board = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let after = play(&board, &["a1a8"]);
    assert_eq!(after.castling_rights().to_fen(), "Kk");
}

#[test]
fn test_promotion_replaces_pawn() {
    let board = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let after = board.after_move(&find_move(&board, "a7a8n"));
    assert_eq!(after.piece_on(Square(7, 0)), Some(Piece::Knight));
    assert_eq!(after.color_on(Square(7, 0)), Some(Color::White));
    assert!(after.is_empty(Square(6, 0)));
}

#[test]
fn test_fullmove_number_advances_after_black() {
    let board = play(&Position::new(), &["e2e4"]);
    assert_eq!(board.fullmove_number(), 1);
    let board = play(&board, &["e7e5"]);
    assert_eq!(board.fullmove_number(), 2);
}

#[test]
fn test_clocks_saturate_at_their_limit() {
    let board = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 4294967295 4294967295").unwrap();
    let board = play(&board, &["h1h2", "e8d8"]);
    assert_eq!(board.halfmove_clock(), u32::MAX);
    assert_eq!(board.fullmove_number(), u32::MAX);
}

#[test]
fn test_key_tracks_position_not_path() {
    let direct = play(&Position::new(), &["g1f3", "g8f6"]);
    let roundabout = play(
        &Position::new(),
        &["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6"],
    );
    assert_eq!(direct.key(), roundabout.key());
    assert_ne!(direct.key(), Position::new().key());
}
