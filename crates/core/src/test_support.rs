// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for unit tests

use crate::callback::Callback;
use crate::config::{EmitterConfig, Validation};
use crate::emitter::Emitter;
use crate::scheduler::{Scheduler, Work, SYNC};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;

static DEFAULT_SCHEDULER_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that read or replace the process-wide default scheduler
pub fn default_scheduler_lock() -> MutexGuard<'static, ()> {
    DEFAULT_SCHEDULER_LOCK
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

/// Records every callback invocation as `(label, args)`
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<(String, Vec<Value>)>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback(&self, label: &str) -> Callback {
        let calls = Arc::clone(&self.calls);
        let label = label.to_string();
        Callback::new(move |call| {
            calls
                .lock()
                .unwrap()
                .push((label.clone(), call.args().to_vec()));
        })
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn labels(&self) -> Vec<String> {
        self.calls().into_iter().map(|(label, _)| label).collect()
    }

    pub fn count(&self, label: &str) -> usize {
        self.calls().iter().filter(|(l, _)| l == label).count()
    }
}

/// Runs work inline and counts submissions
#[derive(Clone, Default)]
pub struct CountingScheduler {
    submitted: Arc<AtomicUsize>,
}

impl CountingScheduler {
    pub fn submitted(&self) -> usize {
        self.submitted.load(Ordering::SeqCst)
    }
}

impl Scheduler for CountingScheduler {
    fn schedule(&self, work: Work) {
        self.submitted.fetch_add(1, Ordering::SeqCst);
        work();
    }
}

/// Emitter on the synchronous scheduler with validation on
pub fn sync_emitter() -> Emitter {
    Emitter::with_config(
        EmitterConfig::new()
            .with_scheduler(Arc::new(SYNC))
            .with_validation(Validation::Enabled),
    )
}

/// A writer that captures log output for testing
#[derive(Clone, Default)]
pub struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a TRACE-level subscriber and returns what it logged
pub fn with_tracing<T>(f: impl FnOnce() -> T) -> (String, T) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (logs.contents(), result)
}
