//! Latest-edit-wins task scheduling for expensive retokenization.
//!
//! Each call to `schedule` supersedes any task still waiting out its delay;
//! a superseded task exits without running its action. Correctness never
//! depends on this, it only bounds how often an expensive encode runs.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

#[derive(Debug, Default)]
pub(crate) struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to run after `delay` unless a newer schedule (or
    /// `cancel`) lands first. The handle joins to whether the action ran.
    pub(crate) fn schedule<F>(&self, delay: Duration, action: F) -> JoinHandle<bool>
    where
        F: FnOnce() + Send + 'static,
    {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        thread::spawn(move || {
            thread::sleep(delay);
            if generation.load(Ordering::SeqCst) != ticket {
                return false;
            }
            action();
            true
        })
    }

    /// Drop any pending task without scheduling a new one.
    pub(crate) fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
