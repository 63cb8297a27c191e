//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, Piece};
use super::square::Square;

/// Special-move classification. The variants are mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Normal,
    DoublePawnPush,
    EnPassant,
    Castle(CastleSide),
}

/// A fully described move.
///
/// Moves are produced by the generator against a specific position, so the
/// moving piece, its color and any captured piece are recorded up front.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub color: Color,
    pub captured: Option<Piece>,
    pub promotion: Option<Piece>,
    pub kind: MoveKind,
}

impl Move {
    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_en_passant(self) -> bool {
        self.kind == MoveKind::EnPassant
    }

    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(self) -> bool {
        self.kind == MoveKind::DoublePawnPush
    }

    /// The castling wing, if this is a castling move.
    #[inline]
    #[must_use]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::Castle(side) => Some(side),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Material value of the captured piece, 0 for quiet moves.
    #[inline]
    #[must_use]
    pub fn capture_value(self) -> i32 {
        self.captured.map_or(0, Piece::value)
    }

    /// Coordinate notation (`e2e4`, `e7e8q`).
    #[must_use]
    pub fn to_coordinate(self) -> String {
        self.to_string()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if let Some(captured) = self.captured {
            write!(f, " x{}", captured.to_char())?;
        }
        match self.kind {
            MoveKind::Normal => {}
            MoveKind::DoublePawnPush => write!(f, " double")?,
            MoveKind::EnPassant => write!(f, " ep")?,
            MoveKind::Castle(side) => write!(f, " {}", side.san())?,
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Upper bound on moves in any legal chess position.
pub(crate) const MAX_MOVES: usize = 256;

/// Ordered list of moves, in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert!(self.moves.len() < MAX_MOVES);
        self.moves.push(mv);
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// Moves starting on `from`, keeping generation order.
    #[must_use]
    pub fn from_square(&self, from: Square) -> MoveList {
        self.iter().filter(|m| m.from == from).copied().collect()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Move> {
        self.moves
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
