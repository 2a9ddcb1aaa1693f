//! Run-once guard for module synchronization.
//!
//! A [`SyncGuard`] records whether a load sequence has completed. The flag is
//! only ever set through a [`SyncPermit`], and permits are handed out one at a
//! time, so concurrent callers cannot both run a load sequence. Once set the
//! flag is never cleared.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use tokio::sync::{Mutex, MutexGuard};

static GLOBAL_GUARD: OnceLock<Arc<SyncGuard>> = OnceLock::new();

/// Process-wide "modules are synchronized" token.
#[derive(Debug, Default)]
pub struct SyncGuard {
    done: AtomicBool,
    gate: Mutex<()>,
}

impl SyncGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The guard shared by every harness in this process.
    pub fn global() -> Arc<SyncGuard> {
        Arc::clone(GLOBAL_GUARD.get_or_init(|| Arc::new(SyncGuard::new())))
    }

    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    /// Waits for exclusive access to run the load sequence.
    ///
    /// Returns `None` if the sequence has already completed, including when
    /// it completed while this caller was waiting.
    pub async fn acquire(&self) -> Option<SyncPermit<'_>> {
        if self.is_done() {
            return None;
        }

        let gate = self.gate.lock().await;
        if self.is_done() {
            return None;
        }

        Some(SyncPermit {
            guard: self,
            _gate: gate,
        })
    }
}

/// Exclusive right to run the load sequence.
///
/// Dropping a permit without calling [`complete`](SyncPermit::complete)
/// leaves the guard unset so a later caller can retry.
pub struct SyncPermit<'a> {
    guard: &'a SyncGuard,
    _gate: MutexGuard<'a, ()>,
}

impl SyncPermit<'_> {
    /// Marks the sequence as done for the lifetime of the guard.
    pub fn complete(self) {
        self.guard.done.store(true, Ordering::Release);
    }
}
