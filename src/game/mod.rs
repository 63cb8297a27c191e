//! A single game: the current position plus everything needed to undo
//! moves, detect repetition, report a result and write PGN.
//!
//! Each [`Game`] owns its own state, so several games can run side by side.
//!
//! # Example
//! ```
//! use chess_game::board::{Outcome, Reason};
//! use chess_game::game::Game;
//!
//! let mut game = Game::new();
//! for san in ["f3", "e5", "g4", "Qh4#"] {
//!     game.make_move(san).unwrap();
//! }
//! let result = game.result().unwrap();
//! assert_eq!(result.outcome, Outcome::BlackWins);
//! assert_eq!(result.reason, Reason::Checkmate);
//! ```

mod pgn;
mod repetition;

use chrono::{DateTime, Utc};
use log::{debug, error, info};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    Color, FenError, GameResult, Move, MoveError, MoveList, Outcome, Piece, Position, Reason,
    Square, STARTING_FEN,
};
use repetition::RepetitionTable;

pub use pgn::PgnMetadata;

/// How a caller names a move: SAN text, or the squares a user clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveInput {
    San(String),
    Coordinates {
        from: Square,
        to: Square,
        /// Defaults to a queen when a pawn reaches the last rank
        promotion: Option<Piece>,
    },
}

impl From<&str> for MoveInput {
    fn from(san: &str) -> Self {
        MoveInput::San(san.to_string())
    }
}

impl From<String> for MoveInput {
    fn from(san: String) -> Self {
        MoveInput::San(san)
    }
}

impl From<(Square, Square)> for MoveInput {
    fn from((from, to): (Square, Square)) -> Self {
        MoveInput::Coordinates {
            from,
            to,
            promotion: None,
        }
    }
}

impl From<(Square, Square, Piece)> for MoveInput {
    fn from((from, to, promotion): (Square, Square, Piece)) -> Self {
        MoveInput::Coordinates {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl From<Move> for MoveInput {
    fn from(mv: Move) -> Self {
        MoveInput::Coordinates {
            from: mv.from,
            to: mv.to,
            promotion: mv.promotion,
        }
    }
}

/// One played move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryEntry {
    pub mv: Move,
    pub san: String,
    /// Full position before the move; undo reloads it.
    pub fen_before: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    start_fen: String,
    history: Vec<HistoryEntry>,
    repetitions: RepetitionTable,
    /// Resignation, flag fall or agreed draw
    declared: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::with_position(Position::new())
    }

    /// A game starting from `fen`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::with_position(Position::from_fen(fen)?))
    }

    fn with_position(position: Position) -> Self {
        Game {
            start_fen: position.to_fen(),
            repetitions: RepetitionTable::starting_from(position.key()),
            position,
            history: Vec::new(),
            declared: None,
        }
    }

    /// Replace the game with a fresh one starting from `fen`. On error the
    /// current game is kept.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        *self = Self::from_fen(fen)?;
        Ok(())
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    /// FEN of the position the game started from.
    #[must_use]
    pub fn start_fen(&self) -> &str {
        &self.start_fen
    }

    #[must_use]
    pub fn starts_from_standard_position(&self) -> bool {
        self.start_fen == STARTING_FEN
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.position.legal_moves()
    }

    /// Legal moves for the piece on a selected square.
    #[must_use]
    pub fn moves_from(&self, square: Square) -> MoveList {
        self.position.legal_moves_from(square)
    }

    /// Resolve `input` against the current legal moves and play it.
    ///
    /// All-or-nothing: on error the game is untouched.
    pub fn make_move(&mut self, input: impl Into<MoveInput>) -> Result<Move, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        let mv = self.resolve(&input.into())?;
        let san = self.position.move_to_san(&mv);
        let fen_before = self.position.to_fen();

        self.position.apply_move(&mv);
        let seen = self.repetitions.push(self.position.key());
        debug!("played {san} ({mv}), position seen {seen} time(s)");

        self.history.push(HistoryEntry {
            mv,
            san,
            fen_before,
            timestamp: Utc::now(),
        });

        if let Some(result) = self.result() {
            info!("game over: {result}");
        }
        Ok(mv)
    }

    fn resolve(&self, input: &MoveInput) -> Result<Move, MoveError> {
        match input {
            MoveInput::San(san) => Ok(self.position.parse_san(san)?),
            MoveInput::Coordinates {
                from,
                to,
                promotion,
            } => {
                let wanted = |m: &Move| {
                    m.to == *to
                        && match (m.promotion, promotion) {
                            (Some(p), Some(q)) => p == *q,
                            (Some(p), None) => p == Piece::Queen,
                            (None, None) => true,
                            (None, Some(_)) => false,
                        }
                };
                self.position
                    .legal_moves_from(*from)
                    .iter()
                    .copied()
                    .find(wanted)
                    .ok_or_else(|| MoveError::IllegalMove {
                        notation: match promotion {
                            Some(p) => format!("{from}{to}{}", p.to_char()),
                            None => format!("{from}{to}"),
                        },
                    })
            }
        }
    }

    /// Take back the last move by reloading the position stored before it.
    /// Also lifts a resignation, flag fall or agreed draw. With no moves to
    /// take back, a declared result stands.
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        let entry = self.history.pop()?;
        match Position::from_fen(&entry.fen_before) {
            Ok(position) => {
                self.position = position;
                self.repetitions.pop();
                self.declared = None;
                debug!("undid {}", entry.san);
                Some(entry)
            }
            Err(err) => {
                // Snapshots come from to_fen, so this cannot happen in practice
                error!("stored FEN '{}' failed to load: {err}", entry.fen_before);
                self.history.push(entry);
                None
            }
        }
    }

    #[must_use]
    pub fn is_check(&self) -> bool {
        self.position.in_check()
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    #[must_use]
    pub fn is_fifty_move_rule(&self) -> bool {
        self.position.is_fifty_move_rule()
    }

    /// How many times the current position has occurred, this one included.
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetitions.count(self.position.key())
    }

    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.result().is_some_and(|r| r.outcome == Outcome::Draw)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.result().is_some()
    }

    /// The result, if the game has one. A declared ending wins; otherwise
    /// checkmate, stalemate, insufficient material, the fifty-move rule and
    /// repetition are tried in that order.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.declared
            .or_else(|| self.position.terminal_result())
            .or_else(|| {
                self.is_threefold_repetition()
                    .then(|| GameResult::draw(Reason::Repetition))
            })
    }

    /// `color` resigns.
    pub fn resign(&mut self, color: Color) -> Result<GameResult, MoveError> {
        self.declare(GameResult::win(color.opponent(), Reason::Resignation))
    }

    /// `color` ran out of time.
    pub fn timeout(&mut self, color: Color) -> Result<GameResult, MoveError> {
        self.declare(GameResult::win(color.opponent(), Reason::Timeout))
    }

    pub fn agree_draw(&mut self) -> Result<GameResult, MoveError> {
        self.declare(GameResult::draw(Reason::Agreement))
    }

    fn declare(&mut self, result: GameResult) -> Result<GameResult, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        info!("game over: {result}");
        self.declared = Some(result);
        Ok(result)
    }

    /// Number of positions recorded for repetition, the start included.
    pub(crate) fn recorded_positions(&self) -> usize {
        self.repetitions.len()
    }
}
