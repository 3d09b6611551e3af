//! Mount-scoped cancellation for in-flight async work.
//!
//! A page owns a `MountGuard` for as long as it is mounted and hands
//! `CancelToken`s to the tasks it spawns. Dropping the guard at teardown
//! cancels every token. Tasks check the token before writing their result
//! into shared state; the underlying request itself is not aborted.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Keeps associated tokens live until dropped.
#[derive(Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// A token that reports cancelled once this guard is dropped.
    pub fn token(&self) -> CancelToken {
        CancelToken { alive: self.alive.clone() }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

#[derive(Clone, Debug)]
pub struct CancelToken {
    alive: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        !self.alive.load(Ordering::Relaxed)
    }
}
