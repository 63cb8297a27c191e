//! Square type and algebraic coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (rank, file).
///
/// Both coordinates are zero-based: `Square(0, 0)` is a1, `Square(7, 7)` is h8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize);

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Mirror across the horizontal axis (a1 <-> a8).
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(7 - self.0, self.1)
    }

    /// Index 0-63 with a1=0, b1=1, ..., h8=63
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Step by a (rank, file) delta, `None` when it leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_rank: isize, d_file: isize) -> Option<Square> {
        let rank = self.0 as isize + d_rank;
        let file = self.1 as isize + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square(rank as usize, file as usize))
        } else {
            None
        }
    }

    /// True for light squares (h1, a8, ...).
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.0 + self.1) % 2 == 1
    }

    #[inline]
    #[must_use]
    pub fn file_char(self) -> char {
        (b'a' + self.1 as u8) as char
    }

    #[inline]
    #[must_use]
    pub fn rank_char(self) -> char {
        (b'1' + self.0 as u8) as char
    }

    /// Every square in board-scan order: rank 8 down to rank 1, files a to h.
    pub fn scan_order() -> impl Iterator<Item = Square> {
        (0..8).rev().flat_map(|rank| (0..8).map(move |file| Square(rank, file)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Square(
            rank as usize - '1' as usize,
            file as usize - 'a' as usize,
        ))
    }
}
