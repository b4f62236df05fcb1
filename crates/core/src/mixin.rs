// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Attach an emitter to an arbitrary host type
//!
//! A host embeds an [`EmitterSlot`] and implements [`Host`]. After
//! [`add_to`], the [`HostEvents`] methods on the host act on the attached
//! emitter, sharing subscriptions with every other handle to it.

use crate::callback::{Callback, Receiver};
use crate::emitter::{all_events, Emitter};
use crate::error::EmitterError;
use serde_json::Value;
use std::sync::RwLock;

/// Storage for the emitter a host delegates to
#[derive(Default)]
pub struct EmitterSlot {
    emitter: RwLock<Option<Emitter>>,
}

impl EmitterSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The attached emitter, if any
    pub fn get(&self) -> Option<Emitter> {
        self.emitter
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set(&self, emitter: Emitter) {
        let mut slot = self.emitter.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(emitter);
    }

    fn require(&self) -> Result<Emitter, EmitterError> {
        self.get()
            .ok_or_else(|| EmitterError::invalid("no emitter attached to this host"))
    }
}

impl std::fmt::Debug for EmitterSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("EmitterSlot").field(&self.get()).finish()
    }
}

/// A type that can carry an emitter
pub trait Host {
    fn emitter_slot(&self) -> &EmitterSlot;
}

/// Attach `instance` (or a fresh emitter) to `host` and return it
///
/// Attaching again replaces the previous emitter.
pub fn add_to<H: Host + ?Sized>(host: &H, instance: Option<Emitter>) -> Emitter {
    let emitter = instance.unwrap_or_default();
    host.emitter_slot().set(emitter.clone());
    tracing::trace!(emitter = ?emitter, "emitter attached to host");
    emitter
}

/// Emitter operations available on every [`Host`]
///
/// Each call fails with `InvalidArgument` if nothing was attached.
pub trait HostEvents: Host {
    fn on(&self, name: &str, callback: Callback) -> Result<(), EmitterError> {
        self.emitter_slot().require()?.on(name, callback)
    }

    fn on_bound(&self, name: &str, callback: Callback, receiver: Receiver) -> Result<(), EmitterError> {
        self.emitter_slot().require()?.on_bound(name, callback, receiver)
    }

    fn once(&self, name: &str, callback: Callback) -> Result<(), EmitterError> {
        self.emitter_slot().require()?.once(name, callback)
    }

    fn off(&self, name: Option<&str>, callback: Option<&Callback>) -> Result<(), EmitterError> {
        self.emitter_slot().require()?.off(name, callback)
    }

    fn trigger(&self, name: &str, args: Vec<Value>) -> Result<(), EmitterError> {
        self.emitter_slot().require()?.trigger(name, args)
    }

    fn all_events(&self) -> &'static str {
        all_events()
    }
}

impl<H: Host + ?Sized> HostEvents for H {}

#[cfg(test)]
#[path = "mixin_tests.rs"]
mod tests;
