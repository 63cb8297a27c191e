//! PGN export and import.

use chrono::Utc;
use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Game;
use crate::board::{PgnError, Position};

/// Target width of exported movetext lines.
const LINE_WIDTH: usize = 80;

/// Header tags supplied by the caller. Missing tags fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PgnMetadata {
    pub event: Option<String>,
    pub site: Option<String>,
    /// `YYYY.MM.DD`; today when absent
    pub date: Option<String>,
    pub white: Option<String>,
    pub black: Option<String>,
}

impl PgnMetadata {
    fn tags(&self) -> [(&'static str, String); 5] {
        let or = |value: &Option<String>, default: &str| {
            value.clone().unwrap_or_else(|| default.to_string())
        };
        [
            ("Event", or(&self.event, "Casual Game")),
            ("Site", or(&self.site, "?")),
            (
                "Date",
                self.date
                    .clone()
                    .unwrap_or_else(|| Utc::now().format("%Y.%m.%d").to_string()),
            ),
            ("White", or(&self.white, "?")),
            ("Black", or(&self.black, "?")),
        ]
    }
}

impl Game {
    /// Export the game as PGN.
    #[must_use]
    pub fn pgn(&self, metadata: &PgnMetadata) -> String {
        let result = self.result().map_or("*", |r| r.outcome.as_str());

        let mut out = String::new();
        for (name, value) in metadata.tags() {
            push_tag(&mut out, name, &value);
        }
        push_tag(&mut out, "Result", result);
        if !self.starts_from_standard_position() {
            push_tag(&mut out, "SetUp", "1");
            push_tag(&mut out, "FEN", &self.start_fen);
        }
        out.push('\n');

        let mut tokens: Vec<String> = Vec::with_capacity(self.history.len() * 3 / 2 + 1);
        for (ply, entry) in self.history.iter().enumerate() {
            // fen_before always parses; the fields needed are read directly
            let mut fields = entry.fen_before.split_whitespace();
            let black_to_move = fields.nth(1) == Some("b");
            let number = fields.nth(3).unwrap_or("1");
            if !black_to_move {
                tokens.push(format!("{number}. {}", entry.san));
            } else if ply == 0 {
                tokens.push(format!("{number}... {}", entry.san));
            } else {
                tokens.push(entry.san.clone());
            }
        }
        tokens.push(result.to_string());

        let mut line_len = 0;
        for token in tokens {
            if line_len > 0 && line_len + 1 + token.len() > LINE_WIDTH {
                out.push('\n');
                line_len = 0;
            } else if line_len > 0 {
                out.push(' ');
                line_len += 1;
            }
            line_len += token.len();
            out.push_str(&token);
        }
        out.push('\n');
        out
    }

    /// Replace this game with one replayed from PGN text.
    ///
    /// Replay stops at the first move that does not resolve; the game is then
    /// left after the last move that did, and the error names the failing
    /// ply. A bad `FEN` tag leaves the game untouched.
    pub fn load_pgn(&mut self, pgn: &str) -> Result<(), PgnError> {
        let (tags, movetext) = split_headers(pgn);

        let start = match tags.iter().find(|(name, _)| name == "FEN") {
            Some((_, fen)) => Position::from_fen(fen)?,
            None => Position::new(),
        };
        *self = Game::with_position(start);

        for (idx, san) in movetext_tokens(&movetext).into_iter().enumerate() {
            if let Err(err) = self.make_move(san.as_str()) {
                let ply = idx + 1;
                warn!("PGN replay stopped at ply {ply} ('{san}'): {err}");
                return Err(PgnError::IllegalMove { ply, san });
            }
        }
        debug!("loaded PGN with {} plies", self.history.len());
        Ok(())
    }
}

fn push_tag(out: &mut String, name: &str, value: &str) {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    out.push_str(&format!("[{name} \"{escaped}\"]\n"));
}

/// Split PGN text into its header tags and the remaining movetext.
fn split_headers(pgn: &str) -> (Vec<(String, String)>, String) {
    let mut tags = Vec::new();
    let mut movetext = String::new();
    for line in pgn.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            if let Some(tag) = parse_tag(&trimmed[1..trimmed.len() - 1]) {
                tags.push(tag);
            }
        } else {
            movetext.push_str(line);
            movetext.push('\n');
        }
    }
    (tags, movetext)
}

fn parse_tag(inner: &str) -> Option<(String, String)> {
    let (name, rest) = inner.trim().split_once(char::is_whitespace)?;
    let value = rest.trim().strip_prefix('"')?.strip_suffix('"')?;
    Some((
        name.to_string(),
        value.replace("\\\"", "\"").replace("\\\\", "\\"),
    ))
}

/// SAN tokens of the movetext, with comments, variations, annotation glyphs,
/// move numbers and the result token removed.
fn movetext_tokens(movetext: &str) -> Vec<String> {
    let mut cleaned = String::with_capacity(movetext.len());
    let mut brace_comment = false;
    let mut line_comment = false;
    let mut variation_depth = 0usize;
    for c in movetext.chars() {
        if line_comment {
            if c == '\n' {
                line_comment = false;
                cleaned.push(' ');
            }
            continue;
        }
        if brace_comment {
            if c == '}' {
                brace_comment = false;
                cleaned.push(' ');
            }
            continue;
        }
        match c {
            '{' => brace_comment = true,
            ';' => line_comment = true,
            '(' => variation_depth += 1,
            ')' => {
                variation_depth = variation_depth.saturating_sub(1);
                cleaned.push(' ');
            }
            _ if variation_depth > 0 => {}
            _ => cleaned.push(c),
        }
    }

    cleaned
        .split_whitespace()
        .filter(|token| !token.starts_with('$'))
        .filter(|token| !matches!(*token, "1-0" | "0-1" | "1/2-1/2" | "*"))
        .filter_map(|token| {
            // Drop a leading move number, glued ("1.e4") or not ("1.", "3...")
            let san = token.trim_start_matches(|c: char| c.is_ascii_digit());
            let san = if san.len() < token.len() && san.starts_with('.') {
                san.trim_start_matches('.')
            } else {
                token
            };
            (!san.is_empty()).then(|| san.to_string())
        })
        .collect()
}
