//! Depth-limited minimax with alpha-beta pruning.
//!
//! White maximizes and Black minimizes; scores are always from White's
//! point of view. Each child is searched on its own clone of the position.

use std::cmp::Reverse;

use log::trace;

use crate::board::{Color, Move, MoveList, Position};
use crate::sync::StopFlag;

/// Score of a checkmate found at the horizon. Mates found with depth to
/// spare score further from zero, so shorter mates are preferred.
pub const MATE_SCORE: i32 = 100_000;

const INFINITY: i32 = MATE_SCORE * 2;

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Search context for one root analysis.
pub(crate) struct SearchContext<'a> {
    stop: &'a StopFlag,
    pub(crate) stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(stop: &'a StopFlag) -> Self {
        SearchContext {
            stop,
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Minimax value of `position` searched `depth` plies deep.
    pub(crate) fn minimax(
        &mut self,
        position: &Position,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        let mut moves = position.legal_moves();
        if moves.is_empty() {
            return terminal_score(position, depth);
        }
        if position.is_insufficient_material() || position.is_fifty_move_rule() {
            return 0;
        }
        if depth == 0 || self.stopped() {
            return position.evaluate_with_mobility(moves.len());
        }

        order_moves(&mut moves);
        let maximizing = position.side_to_move() == Color::White;
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in &moves {
            let child = position.after_move(mv);
            let score = self.minimax(&child, depth - 1, alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                trace!("cutoff after {mv} at depth {depth}");
                break;
            }
        }
        best
    }
}

/// Score for a side with no legal moves: mated or stalemated.
fn terminal_score(position: &Position, depth: u32) -> i32 {
    if !position.in_check() {
        return 0;
    }
    let mate = MATE_SCORE + depth as i32;
    match position.side_to_move() {
        Color::White => -mate,
        Color::Black => mate,
    }
}

/// Captures of the most valuable pieces first; the sort is stable, so ties
/// keep generation order.
pub(crate) fn order_moves(moves: &mut MoveList) {
    let mut ordered = moves.as_slice().to_vec();
    ordered.sort_by_key(|mv| Reverse(mv.capture_value()));
    *moves = ordered.into_iter().collect();
}

/// Every root move with the minimax value of the position it leads to,
/// best first for the side to move. `None` if the search was stopped.
pub(crate) fn score_root_moves(
    position: &Position,
    depth: u32,
    stop: &StopFlag,
) -> Option<(Vec<(Move, i32)>, SearchStats)> {
    let mut ctx = SearchContext::new(stop);
    let child_depth = depth.saturating_sub(1);

    let mut scored = Vec::new();
    for mv in &position.legal_moves() {
        let child = position.after_move(mv);
        let score = ctx.minimax(&child, child_depth, -INFINITY, INFINITY);
        if ctx.stopped() {
            return None;
        }
        scored.push((*mv, score));
    }

    match position.side_to_move() {
        Color::White => scored.sort_by_key(|&(_, score)| Reverse(score)),
        Color::Black => scored.sort_by_key(|&(_, score)| score),
    }
    Some((scored, ctx.stats))
}
