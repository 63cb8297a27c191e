//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation
//! - `draw.rs` - Game-ending conditions decided by the position
//! - `apply_move.rs` - Move application and board bookkeeping
//! - `edge_cases.rs` - Special moves and unusual positions
//! - `proptest.rs` - Property-based tests

mod apply_move;
mod perft;

use crate::board::{Move, Position};

/// Find a legal move by its coordinate spelling, e.g. "e2e4" or "a7a8n".
pub(super) fn find_move(position: &Position, coordinate: &str) -> Move {
    position
        .legal_moves()
        .iter()
        .copied()
        .find(|m| m.to_coordinate() == coordinate)
        .unwrap_or_else(|| panic!("{coordinate} is not legal in {}", position.to_fen()))
}

/// Play a sequence of coordinate moves from `position`.
pub(super) fn play(position: &Position, moves: &[&str]) -> Position {
    moves.iter().fold(position.clone(), |current, coordinate| {
        let mv = find_move(&current, coordinate);
        current.after_move(&mv)
    })
}
