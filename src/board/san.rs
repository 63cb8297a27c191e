//! Standard Algebraic Notation (SAN) support.
//!
//! SAN is the human-readable notation used in scoresheets and PGN files.
//! Examples: "e4", "Nf3", "Bxc6+", "O-O", "e8=Q#"
//!
//! # Examples
//! ```
//! use chess_game::board::Position;
//!
//! let position = Position::new();
//! let mv = position.parse_san("e4").unwrap();
//! assert_eq!(position.move_to_san(&mv), "e4");
//! ```

use super::error::SanError;
use super::{CastleSide, Move, Piece, Position, Square};

/// Disambiguation and destination pulled out of a SAN token.
struct SanParts {
    piece: Piece,
    from_file: Option<usize>,
    from_rank: Option<usize>,
    to: Square,
    promotion: Option<Piece>,
}

impl Position {
    /// Format a legal move of this position in SAN.
    #[must_use]
    pub fn move_to_san(&self, mv: &Move) -> String {
        let mut san = String::new();

        if let Some(side) = mv.castle_side() {
            san.push_str(side.san());
        } else {
            match mv.piece.san_letter() {
                Some(letter) => {
                    san.push(letter);
                    san.push_str(&self.disambiguation(mv));
                }
                None if mv.is_capture() => san.push(mv.from.file_char()),
                None => {}
            }
            if mv.is_capture() {
                san.push('x');
            }
            san.push_str(&mv.to.to_string());
            if let Some(letter) = mv.promotion.and_then(Piece::san_letter) {
                san.push('=');
                san.push(letter);
            }
        }

        let after = self.after_move(mv);
        if after.in_check() {
            san.push(if after.has_legal_moves() { '+' } else { '#' });
        }
        san
    }

    /// Origin prefix separating `mv` from other legal moves of the same piece
    /// type to the same square: the file if that is unique, else the rank,
    /// else the whole square.
    fn disambiguation(&self, mv: &Move) -> String {
        let rivals: Vec<Square> = self
            .legal_moves()
            .iter()
            .filter(|m| m.to == mv.to && m.piece == mv.piece && m.from != mv.from)
            .map(|m| m.from)
            .collect();

        if rivals.is_empty() {
            return String::new();
        }
        if rivals.iter().all(|sq| sq.file() != mv.from.file()) {
            return mv.from.file_char().to_string();
        }
        if rivals.iter().all(|sq| sq.rank() != mv.from.rank()) {
            return mv.from.rank_char().to_string();
        }
        mv.from.to_string()
    }

    /// Resolve a SAN token to a legal move of this position.
    ///
    /// Accepts `O-O` and `0-0` castling, a trailing `+`/`#` and annotation
    /// marks, and promotions with or without `=`.
    pub fn parse_san(&self, san: &str) -> Result<Move, SanError> {
        let token = san
            .trim()
            .trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'));
        if token.is_empty() {
            return Err(SanError::Empty);
        }

        let castle = match token {
            "O-O" | "0-0" => Some(CastleSide::Kingside),
            "O-O-O" | "0-0-0" => Some(CastleSide::Queenside),
            _ => None,
        };
        if let Some(side) = castle {
            return self
                .legal_moves()
                .into_iter()
                .find(|m| m.castle_side() == Some(side))
                .ok_or_else(|| SanError::NoMatchingMove {
                    san: san.trim().to_string(),
                });
        }

        let parts = split_san(token)?;
        let candidates: Vec<Move> = self
            .legal_moves()
            .into_iter()
            .filter(|m| {
                m.piece == parts.piece
                    && m.to == parts.to
                    && m.promotion == parts.promotion
                    && parts.from_file.map_or(true, |f| m.from.file() == f)
                    && parts.from_rank.map_or(true, |r| m.from.rank() == r)
            })
            .collect();

        match candidates.as_slice() {
            [mv] => Ok(*mv),
            [] => Err(SanError::NoMatchingMove {
                san: san.trim().to_string(),
            }),
            _ => Err(SanError::AmbiguousMove {
                san: san.trim().to_string(),
            }),
        }
    }
}

/// Break `[piece][file][rank][x]<square>[=promotion]` into its parts.
fn split_san(token: &str) -> Result<SanParts, SanError> {
    let mut chars: Vec<char> = token.chars().collect();

    let piece = match chars.first() {
        Some(&c) if c.is_ascii_uppercase() => {
            let piece = Piece::from_char(c)
                .filter(|&p| p != Piece::Pawn)
                .ok_or(SanError::InvalidPiece { char: c })?;
            chars.remove(0);
            piece
        }
        _ => Piece::Pawn,
    };

    let promotion = match chars.iter().position(|&c| c == '=') {
        Some(idx) => {
            let tail: Vec<char> = chars.split_off(idx);
            match tail.as_slice() {
                ['=', c] => Some(promotion_piece(*c)?),
                _ => {
                    return Err(SanError::InvalidSquare {
                        notation: token.to_string(),
                    })
                }
            }
        }
        None => match chars.last() {
            Some(&c) if piece == Piece::Pawn && c.is_ascii_alphabetic() && chars.len() > 2 => {
                chars.pop();
                Some(promotion_piece(c)?)
            }
            _ => None,
        },
    };

    if chars.len() < 2 {
        return Err(SanError::InvalidSquare {
            notation: token.to_string(),
        });
    }
    let dest: String = chars.split_off(chars.len() - 2).into_iter().collect();
    let to: Square = dest
        .parse()
        .map_err(|_| SanError::InvalidSquare { notation: dest })?;

    let mut from_file = None;
    let mut from_rank = None;
    for c in chars.into_iter().filter(|&c| c != 'x') {
        match c {
            'a'..='h' if from_file.is_none() => from_file = Some(c as usize - 'a' as usize),
            '1'..='8' if from_rank.is_none() => from_rank = Some(c as usize - '1' as usize),
            _ => {
                return Err(SanError::InvalidSquare {
                    notation: token.to_string(),
                })
            }
        }
    }

    Ok(SanParts {
        piece,
        from_file,
        from_rank,
        to,
        promotion,
    })
}

fn promotion_piece(c: char) -> Result<Piece, SanError> {
    match Piece::from_char(c) {
        Some(p @ (Piece::Queen | Piece::Rook | Piece::Bishop | Piece::Knight)) => Ok(p),
        _ => Err(SanError::InvalidPromotion { char: c }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn san_of(fen: &str, from: &str, to: &str) -> String {
        let position = Position::from_fen(fen).unwrap();
        let from: Square = from.parse().unwrap();
        let to: Square = to.parse().unwrap();
        let mv = position
            .legal_moves()
            .into_iter()
            .find(|m| m.from == from && m.to == to)
            .unwrap();
        position.move_to_san(&mv)
    }

    #[test]
    fn test_pawn_and_knight_moves() {
        let position = Position::new();
        let mv = position.parse_san("e4").unwrap();
        assert_eq!(mv.from, Square(1, 4));
        assert_eq!(mv.to, Square(3, 4));
        assert!(mv.is_double_pawn_push());
        assert_eq!(position.move_to_san(&mv), "e4");

        let mv = position.parse_san("Nf3").unwrap();
        assert_eq!(mv.from, Square(0, 6));
        assert_eq!(position.move_to_san(&mv), "Nf3");
    }

    #[test]
    fn test_castling_both_spellings() {
        let position =
            Position::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        let mv = position.parse_san("O-O").unwrap();
        assert_eq!(mv.castle_side(), Some(CastleSide::Kingside));
        assert_eq!(position.move_to_san(&mv), "O-O");

        let mv = position.parse_san("0-0-0").unwrap();
        assert_eq!(mv.castle_side(), Some(CastleSide::Queenside));
        assert_eq!(position.move_to_san(&mv), "O-O-O");
    }

    #[test]
    fn test_pawn_capture_uses_file() {
        let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2";
        assert_eq!(san_of(fen, "e4", "d5"), "exd5");
        let position = Position::from_fen(fen).unwrap();
        assert!(position.parse_san("exd5").unwrap().is_capture());
    }

    #[test]
    fn test_en_passant_san() {
        let fen = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2";
        assert_eq!(san_of(fen, "e5", "d6"), "exd6");
        let position = Position::from_fen(fen).unwrap();
        assert!(position.parse_san("exd6").unwrap().is_en_passant());
    }

    #[test]
    fn test_promotion_with_and_without_equals() {
        let position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let mv = position.parse_san("a8=Q").unwrap();
        assert_eq!(mv.promotion, Some(Piece::Queen));
        assert_eq!(position.move_to_san(&mv), "a8=Q");

        let mv = position.parse_san("a8N").unwrap();
        assert_eq!(mv.promotion, Some(Piece::Knight));

        assert!(matches!(
            position.parse_san("a8=K"),
            Err(SanError::InvalidPromotion { char: 'K' })
        ));
        assert!(matches!(
            position.parse_san("a8"),
            Err(SanError::NoMatchingMove { .. })
        ));
    }

    #[test]
    fn test_file_disambiguation() {
        let fen = "4k3/8/8/8/R6R/8/8/4K3 w - - 0 1";
        assert_eq!(san_of(fen, "a4", "d4"), "Rad4");
        assert_eq!(san_of(fen, "h4", "d4"), "Rhd4");

        let position = Position::from_fen(fen).unwrap();
        assert_eq!(position.parse_san("Rad4").unwrap().from.file(), 0);
        assert_eq!(position.parse_san("Rhd4").unwrap().from.file(), 7);
        assert!(matches!(
            position.parse_san("Rd4"),
            Err(SanError::AmbiguousMove { .. })
        ));
    }

    #[test]
    fn test_rank_disambiguation() {
        // Rooks on a1 and a5 both reach a3
        let fen = "4k3/8/8/R7/8/8/8/R3K3 w - - 0 1";
        assert_eq!(san_of(fen, "a1", "a3"), "R1a3");
        assert_eq!(san_of(fen, "a5", "a3"), "R5a3");
    }

    #[test]
    fn test_full_square_disambiguation() {
        // Queens on a1, a3 and c1 all reach b2
        let fen = "4k3/8/8/8/8/Q7/8/Q1Q1K3 w - - 0 1";
        assert_eq!(san_of(fen, "a1", "b2"), "Qa1b2");
        let position = Position::from_fen(fen).unwrap();
        assert_eq!(position.parse_san("Qa1b2").unwrap().from, Square(0, 0));
    }

    #[test]
    fn test_check_and_mate_suffixes() {
        assert_eq!(san_of("4k3/8/8/8/8/8/8/4K2R w K - 0 1", "h1", "h8"), "Rh8+");
        assert_eq!(
            san_of(
                "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2",
                "d8",
                "h4"
            ),
            "Qh4#"
        );
    }

    #[test]
    fn test_suffixes_and_annotations_are_ignored() {
        let position = Position::new();
        let plain = position.parse_san("Nf3").unwrap();
        assert_eq!(position.parse_san("Nf3+").unwrap(), plain);
        assert_eq!(position.parse_san("Nf3!?").unwrap(), plain);
        assert_eq!(position.parse_san("  Nf3 ").unwrap(), plain);
    }

    #[test]
    fn test_parse_errors() {
        let position = Position::new();
        assert_eq!(position.parse_san(""), Err(SanError::Empty));
        assert_eq!(position.parse_san("+"), Err(SanError::Empty));
        assert!(matches!(
            position.parse_san("Zf3"),
            Err(SanError::InvalidPiece { char: 'Z' })
        ));
        assert!(matches!(
            position.parse_san("Nz9"),
            Err(SanError::InvalidSquare { .. })
        ));
        assert!(matches!(
            position.parse_san("e5"),
            Err(SanError::NoMatchingMove { .. })
        ));
        assert!(matches!(
            position.parse_san("O-O"),
            Err(SanError::NoMatchingMove { .. })
        ));
    }

    #[test]
    fn test_round_trip_over_legal_moves() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        ];
        for fen in fens {
            let position = Position::from_fen(fen).unwrap();
            for mv in position.legal_moves().iter() {
                let san = position.move_to_san(mv);
                assert_eq!(position.parse_san(&san).unwrap(), *mv, "{fen} {san}");
            }
        }
    }
}
