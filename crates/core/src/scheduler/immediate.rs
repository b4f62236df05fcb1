// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{Scheduler, Work};

/// Runs work synchronously, before `schedule` returns
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

/// The synchronous scheduler
pub const SYNC: Immediate = Immediate;

impl Scheduler for Immediate {
    fn schedule(&self, work: Work) {
        work()
    }

    fn name(&self) -> &'static str {
        "immediate"
    }
}
