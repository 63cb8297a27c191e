//! FEN encoding and decoding.
//!
//! Decoding is lenient about *missing* trailing fields, which fall back to
//! `w KQkq - 0 1`, but a field that is present must be well-formed, and the
//! placement must describe a full board with one king per side.

use std::str::FromStr;

use log::debug;

use super::error::FenError;
use super::{CastleSide, CastlingRights, Color, Piece, Position, Square};

/// Standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const FIELD_NAMES: [&str; 6] = [
    "placement",
    "active color",
    "castling",
    "en passant",
    "half-move clock",
    "full-move number",
];

impl Position {
    /// Parse a FEN string, defaulting any missing trailing fields.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Err(FenError::WrongRankCount { found: 0 });
        }
        for name in FIELD_NAMES.iter().skip(parts.len()) {
            debug!("FEN '{fen}' has no {name} field, using the default");
        }

        let mut position = Position::empty();
        parse_placement(&mut position, parts[0])?;

        position.side_to_move = match parts.get(1).copied() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.castling_rights = match parts.get(2) {
            None => CastlingRights::all(),
            Some(field) => parse_castling(field)?,
        };

        position.en_passant_target = match parts.get(3).copied() {
            None | Some("-") => None,
            Some(field) => Some(parse_en_passant(field, position.side_to_move)?),
        };

        if let Some(field) = parts.get(4) {
            position.halfmove_clock = parse_counter(field, "half-move clock")?;
        }
        if let Some(field) = parts.get(5) {
            position.fullmove_number = parse_counter(field, "full-move number")?.max(1);
        }

        Ok(position)
    }

    /// Parse a FEN string that must carry all six fields.
    pub fn from_fen_strict(fen: &str) -> Result<Self, FenError> {
        let found = fen.split_whitespace().count();
        if found != 6 {
            return Err(FenError::TooFewParts { found });
        }
        Position::from_fen(fen)
    }

    /// Serialize to the six-field FEN form.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.fen_char(),
            self.castling_rights.to_fen(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_placement(position: &mut Position, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx;
        let mut file = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                file += skip as usize;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if file >= 8 {
                return Err(FenError::BadRankWidth {
                    rank: rank + 1,
                    files: file + 1,
                });
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            position.set_piece(Square(rank, file), color, piece);
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRankWidth {
                rank: rank + 1,
                files: file,
            });
        }
    }

    for color in Color::BOTH {
        let found = position
            .pieces()
            .filter(|&(_, c, p)| c == color && p == Piece::King)
            .count();
        if found != 1 {
            return Err(FenError::KingCount { color, found });
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        match c {
            'K' => rights.set(Color::White, CastleSide::Kingside),
            'Q' => rights.set(Color::White, CastleSide::Queenside),
            'k' => rights.set(Color::Black, CastleSide::Kingside),
            'q' => rights.set(Color::Black, CastleSide::Queenside),
            _ => return Err(FenError::InvalidCastling { char: c }),
        }
    }
    Ok(rights)
}

/// The target sits behind a pawn the opponent just pushed two squares, so it
/// is on the sixth rank with White to move and the third with Black to move.
fn parse_en_passant(field: &str, side_to_move: Color) -> Result<Square, FenError> {
    let target_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    field
        .parse::<Square>()
        .ok()
        .filter(|sq| sq.rank() == target_rank)
        .ok_or_else(|| FenError::InvalidEnPassant {
            found: field.to_string(),
        })
}

fn parse_counter(field: &str, name: &'static str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidCounter {
        field: name,
        found: field.to_string(),
    })
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_round_trip() {
        let fens = [
            STARTING_FEN,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 17 45",
            "4k3/8/8/8/8/8/8/4K2R w K - 0 1",
        ];
        for fen in fens {
            assert_eq!(Position::from_fen(fen).unwrap().to_fen(), fen);
        }
    }

    #[test]
    fn test_start_fen_matches_new() {
        assert_eq!(Position::from_fen(STARTING_FEN).unwrap(), Position::new());
        assert_eq!(Position::new().to_fen(), STARTING_FEN);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let position = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap();
        assert_eq!(position.to_fen(), STARTING_FEN);

        let position = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b").unwrap();
        assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/8/4K3 b KQkq - 0 1");
    }

    #[test]
    fn test_strict_requires_six_fields() {
        assert!(matches!(
            Position::from_fen_strict("4k3/8/8/8/8/8/8/4K3 w - -"),
            Err(FenError::TooFewParts { found: 4 })
        ));
        assert!(Position::from_fen_strict(STARTING_FEN).is_ok());
    }

    #[test]
    fn test_malformed_fields_are_errors() {
        assert!(matches!(
            Position::from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiece { char: 'x' })
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
            Err(FenError::InvalidSideToMove { .. })
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1"),
            Err(FenError::InvalidCastling { char: 'X' })
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1"),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1"),
            Err(FenError::InvalidCounter { .. })
        ));
    }

    #[test]
    fn test_en_passant_rank_must_match_side_to_move() {
        assert!(matches!(
            Position::from_fen("4k3/8/8/8/8/8/3PP3/4K3 w - e3 0 1"),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            Position::from_fen("4k3/3pp3/8/8/8/8/8/4K3 b - e6 0 1"),
            Err(FenError::InvalidEnPassant { .. })
        ));
        let position = Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").unwrap();
        assert_eq!(position.en_passant_target(), Some(Square(2, 4)));
    }

    #[test]
    fn test_board_shape_is_validated() {
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::WrongRankCount { found: 7 })
        ));
        assert!(matches!(
            Position::from_fen("4k3/8/8/8/8/8/8/4K4 w - - 0 1"),
            Err(FenError::BadRankWidth { .. })
        ));
        assert!(matches!(
            Position::from_fen("4k3/8/8/8/8/8/8/7 w - - 0 1"),
            Err(FenError::BadRankWidth { .. })
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::KingCount {
                color: Color::Black,
                found: 0
            })
        ));
        assert!(Position::from_fen("").is_err());
    }

    #[test]
    fn test_from_str_trait() {
        let position: Position = STARTING_FEN.parse().unwrap();
        assert_eq!(position.side_to_move(), Color::White);
    }
}
