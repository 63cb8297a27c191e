//! AI strength levels.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// (depth, randomness %) for levels 1 to 8.
const LEVELS: [(u32, u8); 8] = [
    (1, 50),
    (1, 35),
    (2, 25),
    (2, 15),
    (3, 10),
    (3, 5),
    (4, 2),
    (5, 0),
];

/// Search depth plus the chance of picking among the top three root moves
/// instead of the best one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Difficulty {
    /// 1 to 8 for table levels, 0 for custom settings
    pub level: u8,
    pub depth: u32,
    /// Percentage, 0 to 100
    pub randomness: u8,
}

impl Difficulty {
    pub const MIN_LEVEL: u8 = 1;
    pub const MAX_LEVEL: u8 = 8;

    /// Table entry for `level`, clamped to 1..=8.
    #[must_use]
    pub fn from_level(level: u8) -> Self {
        let level = level.clamp(Self::MIN_LEVEL, Self::MAX_LEVEL);
        let (depth, randomness) = LEVELS[usize::from(level - 1)];
        Difficulty {
            level,
            depth,
            randomness,
        }
    }

    /// Settings outside the level table. Depth is at least 1 and randomness
    /// at most 100.
    #[must_use]
    pub fn custom(depth: u32, randomness: u8) -> Self {
        Difficulty {
            level: 0,
            depth: depth.max(1),
            randomness: randomness.min(100),
        }
    }

    /// Every table level, weakest first.
    pub fn levels() -> impl Iterator<Item = Difficulty> {
        (Self::MIN_LEVEL..=Self::MAX_LEVEL).map(Self::from_level)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::from_level(Self::MAX_LEVEL)
    }
}
