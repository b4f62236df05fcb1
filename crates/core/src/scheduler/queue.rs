// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manually drained "next tick" queue

use super::{Scheduler, Work};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Holds work until the host drains it
///
/// Clones share the same queue, so one handle can be given to an emitter
/// while the host keeps another to call [`TaskQueue::run_pending`].
#[derive(Clone, Default)]
pub struct TaskQueue {
    items: Arc<Mutex<VecDeque<Work>>>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued work items
    pub fn pending(&self) -> usize {
        self.items.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Run queued work in FIFO order until the queue is empty
    ///
    /// Work queued while draining also runs. Returns how many items ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            // Lock released before running so work may enqueue more work
            let next = self.items.lock().unwrap_or_else(|e| e.into_inner()).pop_front();
            let Some(work) = next else {
                break;
            };
            work();
            ran += 1;
        }
        ran
    }
}

impl Scheduler for TaskQueue {
    fn schedule(&self, work: Work) {
        self.items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(work);
    }

    fn name(&self) -> &'static str {
        "queue"
    }
}
