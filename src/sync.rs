//! Synchronization primitives for background move searches.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// A thread-safe stop flag polled by the search.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    /// Create a new stop flag (initially not stopped).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// Single-use mailbox a worker thread fills and its owner empties.
#[derive(Debug)]
pub(crate) struct ResultSlot<T>(Arc<Mutex<SlotState<T>>>);

#[derive(Debug)]
enum SlotState<T> {
    Pending,
    Filled(T),
    Taken,
}

impl<T> Clone for ResultSlot<T> {
    fn clone(&self) -> Self {
        ResultSlot(Arc::clone(&self.0))
    }
}

impl<T> ResultSlot<T> {
    pub(crate) fn new() -> Self {
        ResultSlot(Arc::new(Mutex::new(SlotState::Pending)))
    }

    /// Store the value. Ignored once the slot has been filled or emptied.
    pub(crate) fn fill(&self, value: T) {
        let mut state = self.0.lock();
        if matches!(*state, SlotState::Pending) {
            *state = SlotState::Filled(value);
        }
    }

    pub(crate) fn is_filled(&self) -> bool {
        matches!(*self.0.lock(), SlotState::Filled(_))
    }

    /// Take the value if it is there; afterwards the slot stays empty.
    pub(crate) fn take(&self) -> Option<T> {
        let mut state = self.0.lock();
        match std::mem::replace(&mut *state, SlotState::Taken) {
            SlotState::Filled(value) => Some(value),
            SlotState::Pending => {
                *state = SlotState::Pending;
                None
            }
            SlotState::Taken => None,
        }
    }
}
