// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide named emitters
//!
//! A channel is created on first lookup and cached for the life of the
//! process. The scheduler it uses is the default in effect at that moment.

use crate::emitter::Emitter;
use crate::error::EmitterError;
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

static CHANNELS: LazyLock<Mutex<HashMap<String, Emitter>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

static GLOBAL: LazyLock<Emitter> = LazyLock::new(Emitter::new);

/// The emitter registered under `name`, created if missing
///
/// Repeated lookups return the same instance. Any string, including the
/// empty one, names a channel.
pub fn channel(name: &str) -> Result<Emitter, EmitterError> {
    let mut channels = CHANNELS.lock().unwrap_or_else(|e| e.into_inner());
    let emitter = channels.entry(name.to_string()).or_insert_with(|| {
        tracing::debug!(channel = name, "channel created");
        Emitter::new()
    });
    Ok(emitter.clone())
}

/// The process-wide default emitter
pub fn global() -> &'static Emitter {
    &GLOBAL
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
