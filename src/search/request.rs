//! Non-blocking AI move requests.

use std::thread::{self, JoinHandle};

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{select_move_with_stop, Difficulty};
use crate::board::{Move, Position};
use crate::sync::{ResultSlot, StopFlag};

/// A move search running on a background thread over its own copy of the
/// position. The caller's game is never touched; apply the returned move
/// yourself once it arrives.
///
/// Dropping the handle cancels the search and detaches the worker.
#[derive(Debug)]
pub struct AiRequest {
    slot: ResultSlot<Option<Move>>,
    stop: StopFlag,
    handle: Option<JoinHandle<()>>,
}

impl AiRequest {
    /// Start searching `position` at a table level.
    #[must_use]
    pub fn spawn(position: &Position, level: u8) -> Self {
        Self::start(position.clone(), Difficulty::from_level(level), None)
    }

    /// Start a search with explicit settings and, for reproducible choices,
    /// an RNG seed.
    #[must_use]
    pub fn spawn_with(position: &Position, difficulty: Difficulty, seed: Option<u64>) -> Self {
        Self::start(position.clone(), difficulty, seed)
    }

    fn start(position: Position, difficulty: Difficulty, seed: Option<u64>) -> Self {
        let slot = ResultSlot::new();
        let stop = StopFlag::new();

        let worker_slot = slot.clone();
        let worker_stop = stop.clone();
        let job = move || {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mv = select_move_with_stop(&position, difficulty, &mut rng, &worker_stop);
            if worker_stop.is_stopped() {
                debug!("AI search cancelled");
                worker_slot.fill(None);
            } else {
                worker_slot.fill(mv);
            }
        };

        let handle = match thread::Builder::new()
            .name("ai-search".to_string())
            .spawn(job.clone())
        {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn!("could not spawn AI search thread ({err}), searching inline");
                job();
                None
            }
        };

        AiRequest { slot, stop, handle }
    }

    /// Whether a result is waiting to be taken.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.slot.is_filled()
    }

    /// Take the result without blocking. The outer `None` means the search
    /// is still running (or the result was already taken); the inner value
    /// is the chosen move, `None` for a terminal position or a cancelled
    /// search.
    pub fn try_take(&mut self) -> Option<Option<Move>> {
        let result = self.slot.take()?;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        Some(result)
    }

    /// Block until the search finishes and return its move.
    #[must_use]
    pub fn wait(mut self) -> Option<Move> {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("AI search thread panicked");
                return None;
            }
        }
        self.slot.take().flatten()
    }

    /// Ask the search to stop; its result becomes `None`.
    pub fn cancel(&self) {
        self.stop.stop();
    }
}

impl Drop for AiRequest {
    fn drop(&mut self) {
        self.stop.stop();
    }
}
