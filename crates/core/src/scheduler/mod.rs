// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedulers decide when a trigger's fan-out runs
//!
//! A scheduler receives a unit of work and guarantees it runs exactly once,
//! at some point, in submission order relative to other work handed to the
//! same scheduler.
//!
//! - [`Immediate`] (also [`SYNC`]) runs work inline
//! - [`Deferred`] runs work on a tokio task, or inline without a runtime
//! - [`TaskQueue`] holds work until the host calls `run_pending`

mod deferred;
mod immediate;
mod queue;

pub use deferred::Deferred;
pub use immediate::{Immediate, SYNC};
pub use queue::TaskQueue;

use std::sync::{Arc, LazyLock, RwLock};

/// A unit of deferred work: one trigger's fan-out
pub type Work = Box<dyn FnOnce() + Send + 'static>;

/// Shared handle to a scheduler
pub type SchedulerRef = Arc<dyn Scheduler>;

/// Executes submitted work exactly once, preserving submission order
pub trait Scheduler: Send + Sync {
    fn schedule(&self, work: Work);

    /// Short name for logs
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> Scheduler for F
where
    F: Fn(Work) + Send + Sync,
{
    fn schedule(&self, work: Work) {
        self(work)
    }
}

static DEFAULT_SCHEDULER: LazyLock<RwLock<SchedulerRef>> =
    LazyLock::new(|| {
        let scheduler: SchedulerRef = Arc::new(Deferred::new());
        RwLock::new(scheduler)
    });

/// The scheduler new emitters capture when none is configured
pub fn default_scheduler() -> SchedulerRef {
    DEFAULT_SCHEDULER
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
}

/// Replace the process-wide default
///
/// Emitters capture the default when created; existing emitters keep the
/// scheduler they were created with.
pub fn set_default_scheduler(scheduler: SchedulerRef) {
    tracing::debug!(scheduler = scheduler.name(), "default scheduler changed");
    let mut current = DEFAULT_SCHEDULER.write().unwrap_or_else(|e| e.into_inner());
    *current = scheduler;
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
