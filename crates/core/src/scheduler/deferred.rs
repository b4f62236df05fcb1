// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tokio-backed deferred scheduler

use super::{Scheduler, TaskQueue, Work};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Defers work to a tokio task
///
/// Work goes into one FIFO queue per instance. Each submission spawns a
/// drain task on the current runtime, and whichever drain runs first
/// empties the queue, so work submitted from a runtime that is never driven
/// again still runs on the next one that is. Only one drain runs at a time,
/// which keeps execution in submission order across runtimes and threads.
///
/// Without a current runtime the queue is drained inline, before
/// `schedule` returns, unless a drain is already running elsewhere; that
/// drain then picks the work up.
#[derive(Clone, Default)]
pub struct Deferred {
    queue: TaskQueue,
    draining: Arc<AtomicBool>,
}

impl Deferred {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run queued work unless another drain is active
    fn drain(&self) {
        loop {
            if self.draining.swap(true, Ordering::SeqCst) {
                return;
            }
            let ran = {
                let _active = DrainGuard(&self.draining);
                self.queue.run_pending()
            };
            tracing::trace!(ran, "deferred queue drained");
            // Work queued after the last pop but before the flag cleared
            if self.queue.pending() == 0 {
                return;
            }
        }
    }
}

/// Clears the draining flag even if work panics
struct DrainGuard<'a>(&'a AtomicBool);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Scheduler for Deferred {
    fn schedule(&self, work: Work) {
        self.queue.schedule(work);

        match Handle::try_current() {
            Ok(handle) => {
                let deferred = self.clone();
                handle.spawn(async move { deferred.drain() });
            }
            Err(_) => {
                tracing::trace!("no tokio runtime, draining inline");
                self.drain();
            }
        }
    }

    fn name(&self) -> &'static str {
        "deferred"
    }
}
