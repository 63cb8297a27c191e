//! Game-state predicates and results.
//!
//! Nothing here is cached: every predicate is recomputed from the position,
//! so it can never disagree with the board.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Position, Square};

/// Half-move clock value at which the fifty-move rule applies.
pub const FIFTY_MOVE_PLIES: u32 = 100;

/// Final score of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
}

impl Outcome {
    #[must_use]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => Outcome::WhiteWins,
            Color::Black => Outcome::BlackWins,
        }
    }

    /// PGN result token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::WhiteWins => "1-0",
            Outcome::BlackWins => "0-1",
            Outcome::Draw => "1/2-1/2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Reason {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    FiftyMoveRule,
    Repetition,
    Resignation,
    Timeout,
    Agreement,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Reason::Checkmate => "checkmate",
            Reason::Stalemate => "stalemate",
            Reason::InsufficientMaterial => "insufficient material",
            Reason::FiftyMoveRule => "fifty-move rule",
            Reason::Repetition => "threefold repetition",
            Reason::Resignation => "resignation",
            Reason::Timeout => "timeout",
            Reason::Agreement => "agreement",
        };
        f.write_str(text)
    }
}

/// A finished game's result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameResult {
    pub outcome: Outcome,
    pub reason: Reason,
    /// Set for decisive outcomes only
    pub winner: Option<Color>,
}

impl GameResult {
    #[must_use]
    pub const fn win(winner: Color, reason: Reason) -> Self {
        GameResult {
            outcome: Outcome::win_for(winner),
            reason,
            winner: Some(winner),
        }
    }

    #[must_use]
    pub const fn draw(reason: Reason) -> Self {
        GameResult {
            outcome: Outcome::Draw,
            reason,
            winner: None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.outcome, self.reason)
    }
}

impl Position {
    /// Whether the side to move is in check.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }

    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        self.pseudo_legal_moves().iter().any(|m| self.is_legal(m))
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_moves()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_moves()
    }

    /// Neither side can ever mate: bare kings, a single minor piece, or
    /// bishops only, all standing on squares of one color.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        let mut knights = 0;
        let mut bishop_squares: Vec<Square> = Vec::new();

        for (sq, _, piece) in self.pieces() {
            match piece {
                Piece::King => {}
                minor if minor.is_minor() => {
                    minors += 1;
                    if minor == Piece::Knight {
                        knights += 1;
                    } else {
                        bishop_squares.push(sq);
                    }
                }
                _ => return false,
            }
        }

        if minors <= 1 {
            return true;
        }
        if knights > 0 {
            return false;
        }
        let first_light = bishop_squares[0].is_light();
        bishop_squares.iter().all(|sq| sq.is_light() == first_light)
    }

    #[must_use]
    pub fn is_fifty_move_rule(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_PLIES
    }

    /// Result decided by the position alone (everything except repetition
    /// and out-of-board events). Checkmate is tested before any draw, then
    /// stalemate, insufficient material and the fifty-move rule.
    #[must_use]
    pub fn terminal_result(&self) -> Option<GameResult> {
        let no_moves = !self.has_legal_moves();
        if no_moves {
            return Some(if self.in_check() {
                GameResult::win(self.side_to_move.opponent(), Reason::Checkmate)
            } else {
                GameResult::draw(Reason::Stalemate)
            });
        }
        if self.is_insufficient_material() {
            return Some(GameResult::draw(Reason::InsufficientMaterial));
        }
        if self.is_fifty_move_rule() {
            return Some(GameResult::draw(Reason::FiftyMoveRule));
        }
        None
    }
}
