//! Move search and AI move selection.
//!
//! [`select_move`] scores every root move with a fixed-depth alpha-beta
//! search and then, depending on the [`Difficulty`], plays the best one or
//! a random pick among the top three. Randomness comes from the caller's
//! [`rand::Rng`], so seeded generators give reproducible play.
//!
//! # Example
//! ```
//! use chess_game::board::Position;
//! use chess_game::search::{select_move, Difficulty};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mv = select_move(&Position::new(), Difficulty::from_level(3), &mut rng);
//! assert!(mv.is_some());
//! ```

mod difficulty;
mod minimax;
mod request;

use log::debug;
use rand::Rng;

use crate::board::{Move, Position};
use crate::sync::StopFlag;

pub use difficulty::Difficulty;
pub use minimax::{SearchStats, MATE_SCORE};
pub use request::AiRequest;

/// How many of the best root moves a randomized pick chooses from.
const RANDOM_POOL: usize = 3;

/// Root moves scored for one search, best first for the side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootAnalysis {
    pub candidates: Vec<(Move, i32)>,
    pub stats: SearchStats,
}

impl RootAnalysis {
    #[must_use]
    pub fn best(&self) -> Option<(Move, i32)> {
        self.candidates.first().copied()
    }
}

/// Score every legal root move `depth` plies deep.
#[must_use]
pub fn analyze(position: &Position, depth: u32) -> RootAnalysis {
    analyze_with_stop(position, depth, &StopFlag::new()).unwrap_or(RootAnalysis {
        candidates: Vec::new(),
        stats: SearchStats::default(),
    })
}

fn analyze_with_stop(position: &Position, depth: u32, stop: &StopFlag) -> Option<RootAnalysis> {
    let (candidates, stats) = minimax::score_root_moves(position, depth, stop)?;
    debug!(
        "analyzed {} root moves at depth {depth}: {} nodes, {} cutoffs",
        candidates.len(),
        stats.nodes,
        stats.cutoffs
    );
    Some(RootAnalysis { candidates, stats })
}

/// Pick a move for the side to move. `None` when the position is already
/// decided: checkmate, stalemate, insufficient material or the fifty-move
/// rule.
pub fn select_move<R: Rng + ?Sized>(
    position: &Position,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    select_move_with_stop(position, difficulty, rng, &StopFlag::new())
}

pub(crate) fn select_move_with_stop<R: Rng + ?Sized>(
    position: &Position,
    difficulty: Difficulty,
    rng: &mut R,
    stop: &StopFlag,
) -> Option<Move> {
    if let Some(result) = position.terminal_result() {
        debug!("no move to choose: {result}");
        return None;
    }
    let analysis = analyze_with_stop(position, difficulty.depth, stop)?;
    let (best, score) = analysis.best()?;

    let randomize = difficulty.randomness > 0 && rng.gen_range(0..100u8) < difficulty.randomness;
    let chosen = if randomize {
        let pool = analysis.candidates.len().min(RANDOM_POOL);
        analysis.candidates[rng.gen_range(0..pool)].0
    } else {
        best
    };

    debug!(
        "level {} chose {chosen} (best {best} scoring {score}, randomized: {randomize})",
        difficulty.level
    );
    Some(chosen)
}

/// Pick a move at a table `level` (1 to 8) using the thread-local RNG.
#[must_use]
pub fn request_move(position: &Position, level: u8) -> Option<Move> {
    select_move(position, Difficulty::from_level(level), &mut rand::thread_rng())
}
