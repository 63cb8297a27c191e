//! Error types for position setup, notation and move submission.

use std::fmt;

use super::Color;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Strict parsing requires all six fields
    TooFewParts { found: usize },
    /// Piece placement does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// A rank does not describe exactly 8 files
    BadRankWidth { rank: usize, files: usize },
    /// Each side needs exactly one king
    KingCount { color: Color, found: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Half-move clock or full-move number is not a number
    InvalidCounter { field: &'static str, found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::BadRankWidth { rank, files } => {
                write!(f, "Rank {rank} of FEN placement covers {files} files, expected 8")
            }
            FenError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidCounter { field, found } => {
                write!(f, "Invalid {field} '{found}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for SAN (Standard Algebraic Notation) parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanError {
    /// Empty SAN string
    Empty,
    /// Invalid piece character
    InvalidPiece { char: char },
    /// Invalid square in SAN
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Ambiguous move (multiple pieces can reach the target)
    AmbiguousMove { san: String },
    /// No matching legal move found
    NoMatchingMove { san: String },
}

impl fmt::Display for SanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanError::Empty => write!(f, "Empty SAN string"),
            SanError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in SAN")
            }
            SanError::InvalidSquare { notation } => {
                write!(f, "Invalid square in SAN '{notation}'")
            }
            SanError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            SanError::AmbiguousMove { san } => {
                write!(f, "Ambiguous move '{san}'")
            }
            SanError::NoMatchingMove { san } => {
                write!(f, "No legal move matches '{san}'")
            }
        }
    }
}

impl std::error::Error for SanError {}

/// Error returned when a submitted move cannot be applied.
///
/// The game is left untouched whenever one of these comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The SAN text did not resolve to a legal move
    San(SanError),
    /// No legal move matches the given coordinates
    IllegalMove { notation: String },
    /// The game already has a result
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::San(err) => write!(f, "{err}"),
            MoveError::IllegalMove { notation } => write!(f, "Illegal move '{notation}'"),
            MoveError::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::San(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SanError> for MoveError {
    fn from(err: SanError) -> Self {
        MoveError::San(err)
    }
}

/// Error type for PGN decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PgnError {
    /// The `FEN` header tag could not be parsed
    InvalidFen(FenError),
    /// Replay stopped at this token; earlier moves stay applied
    IllegalMove { ply: usize, san: String },
}

impl fmt::Display for PgnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PgnError::InvalidFen(err) => write!(f, "Invalid FEN tag in PGN: {err}"),
            PgnError::IllegalMove { ply, san } => {
                write!(f, "Could not replay '{san}' at ply {ply}")
            }
        }
    }
}

impl std::error::Error for PgnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PgnError::InvalidFen(err) => Some(err),
            PgnError::IllegalMove { .. } => None,
        }
    }
}

impl From<FenError> for PgnError {
    fn from(err: FenError) -> Self {
        PgnError::InvalidFen(err)
    }
}
