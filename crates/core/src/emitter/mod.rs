// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The dispatch engine
//!
//! An [`Emitter`] owns a registry of subscriptions keyed by event name and a
//! scheduler fixed at creation. `trigger` copies the matching subscription
//! lists and hands one fan-out to the scheduler while holding the emitter's
//! lock, so fan-outs are submitted in the order their snapshots were taken.
//! The lock is reentrant: a synchronous scheduler may run callbacks that
//! call back into the same emitter. Changes made after the snapshot
//! (including from inside a running callback) only affect later triggers.

mod fanout;
mod registry;
mod subscription;

pub use subscription::SubscriptionId;

use crate::callback::{Callback, Receiver};
use crate::config::{EmitterConfig, Validation};
use crate::error::EmitterError;
use crate::scheduler::{default_scheduler, SchedulerRef};
use fanout::Fanout;
use parking_lot::ReentrantMutex;
use registry::Registry;
use serde_json::Value;
use std::cell::RefCell;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, LazyLock};
use subscription::Subscription;

/// Reserved event name whose subscribers receive every triggered event
///
/// Generated per process, so it cannot collide with a chosen name.
pub static ALL_EVENTS: LazyLock<String> =
    LazyLock::new(|| format!("happened:all-events:{}", uuid::Uuid::new_v4()));

/// The reserved all-events name as a `&'static str`
pub fn all_events() -> &'static str {
    ALL_EVENTS.as_str()
}

/// An independent event dispatcher
///
/// Clones share the same subscriptions and scheduler; equality is instance
/// identity.
#[derive(Clone)]
pub struct Emitter {
    inner: Arc<Inner>,
}

struct Inner {
    /// Guards the registry and scheduler submission together
    registry: ReentrantMutex<RefCell<Registry>>,
    scheduler: SchedulerRef,
    validation: Validation,
}

impl Inner {
    /// Borrows never outlive `f`, so reentrant callers never overlap them
    fn with_registry<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
        let guard = self.registry.lock();
        let mut registry = guard.borrow_mut();
        f(&mut registry)
    }
}

impl Emitter {
    /// Emitter on the process-wide default scheduler
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::new())
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        let scheduler = config.scheduler.unwrap_or_else(default_scheduler);
        tracing::trace!(
            scheduler = scheduler.name(),
            validation = ?config.validation,
            "emitter created"
        );
        Self {
            inner: Arc::new(Inner {
                registry: ReentrantMutex::new(RefCell::new(Registry::default())),
                scheduler,
                validation: config.validation,
            }),
        }
    }

    /// The reserved all-events name, see [`ALL_EVENTS`]
    pub fn all_events(&self) -> &'static str {
        all_events()
    }

    pub fn on(&self, name: &str, callback: Callback) -> Result<(), EmitterError> {
        self.subscribe(name, callback, None)
    }

    /// Subscribe with a receiver handed to the callback on every call
    pub fn on_bound(
        &self,
        name: &str,
        callback: Callback,
        receiver: Receiver,
    ) -> Result<(), EmitterError> {
        self.subscribe(name, callback, Some(receiver))
    }

    /// Subscribe for a single call
    ///
    /// The subscription removes itself before the callback runs. It can also
    /// be removed early with `off(name, callback)` using the same handle.
    pub fn once(&self, name: &str, callback: Callback) -> Result<(), EmitterError> {
        self.subscribe_once(name, callback, None)
    }

    pub fn once_bound(
        &self,
        name: &str,
        callback: Callback,
        receiver: Receiver,
    ) -> Result<(), EmitterError> {
        self.subscribe_once(name, callback, Some(receiver))
    }

    /// Unsubscribe
    ///
    /// - `off(None, None)` clears every subscription
    /// - `off(Some(name), None)` clears subscriptions for `name`
    /// - `off(Some(name), Some(cb))` removes every subscription of `cb`
    ///   under `name`, whether made with `on` or `once`
    ///
    /// A callback without a name is rejected. Fan-outs already handed to
    /// the scheduler are not affected.
    pub fn off(&self, name: Option<&str>, callback: Option<&Callback>) -> Result<(), EmitterError> {
        match (name, callback) {
            (None, None) => {
                self.inner.with_registry(Registry::clear);
                tracing::trace!("cleared all subscriptions");
            }
            (None, Some(_)) => {
                if self.inner.validation.is_enabled() {
                    return Err(EmitterError::invalid(
                        "an event name is required to unsubscribe a callback",
                    ));
                }
                tracing::warn!("ignoring unsubscribe of a callback without an event name");
            }
            (Some(name), None) => {
                self.inner.with_registry(|registry| registry.clear_name(name));
                tracing::trace!(event = name, "cleared subscriptions");
            }
            (Some(name), Some(callback)) => {
                let removed = self
                    .inner
                    .with_registry(|registry| registry.remove_callback(name, callback));
                tracing::trace!(event = name, removed, "unsubscribed callback");
            }
        }
        Ok(())
    }

    /// Fan `args` out to the subscribers of `name`, then to all-events
    /// subscribers
    ///
    /// Returns without touching the scheduler when nobody is subscribed.
    /// Subscriber panics are caught and logged; the remaining subscribers
    /// of the same fan-out still run. The all-events name itself cannot be
    /// triggered, whatever the validation mode.
    pub fn trigger(&self, name: &str, args: Vec<Value>) -> Result<(), EmitterError> {
        if name == all_events() {
            return Err(EmitterError::invalid(
                "the all-events name can only be subscribed to",
            ));
        }

        // Held until the fan-out is submitted
        let guard = self.inner.registry.lock();
        let (named, all) = {
            let registry = guard.borrow();
            (registry.snapshot(name), registry.snapshot(all_events()))
        };
        if named.is_none() && all.is_none() {
            tracing::debug!(event = name, "no subscribers, nothing to schedule");
            return Ok(());
        }

        let fanout = Fanout::new(name, args, named.unwrap_or_default(), all.unwrap_or_default());
        tracing::debug!(
            event = name,
            named = fanout.named_len(),
            all_events = fanout.all_len(),
            scheduler = self.inner.scheduler.name(),
            "scheduling fan-out"
        );
        self.inner.scheduler.schedule(Box::new(move || {
            fanout.run();
        }));
        drop(guard);
        Ok(())
    }

    /// Number of current subscriptions for `name`
    pub fn subscriber_count(&self, name: &str) -> usize {
        self.inner.with_registry(|registry| registry.count(name))
    }

    /// True if both handles are the same emitter
    pub fn ptr_eq(&self, other: &Emitter) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn subscribe(
        &self,
        name: &str,
        callback: Callback,
        receiver: Option<Receiver>,
    ) -> Result<(), EmitterError> {
        let subscription = Subscription::new(callback, receiver);
        tracing::trace!(event = name, id = ?subscription.id, "subscribed");
        self.inner
            .with_registry(|registry| registry.push(name, subscription));
        Ok(())
    }

    fn subscribe_once(
        &self,
        name: &str,
        callback: Callback,
        receiver: Option<Receiver>,
    ) -> Result<(), EmitterError> {
        let id = SubscriptionId::next();
        let inner = Arc::downgrade(&self.inner);
        let event = name.to_string();
        let original = callback.clone();
        // Two fan-outs may snapshot this record before either runs
        let fired = AtomicBool::new(false);
        let wrapper = Callback::new(move |call| {
            if fired.swap(true, Ordering::SeqCst) {
                return;
            }
            if let Some(inner) = inner.upgrade() {
                inner.with_registry(|registry| registry.remove_id(&event, id));
            }
            original.invoke(call);
        });

        tracing::trace!(event = name, id = ?id, "subscribed once");
        let subscription = Subscription::wrapping(id, wrapper, callback, receiver);
        self.inner
            .with_registry(|registry| registry.push(name, subscription));
        Ok(())
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Emitter {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Emitter {}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("instance", &Arc::as_ptr(&self.inner))
            .field("scheduler", &self.inner.scheduler.name())
            .field("validation", &self.inner.validation)
            .finish()
    }
}

/// Create an emitter with explicit options
pub fn create(config: EmitterConfig) -> Emitter {
    Emitter::with_config(config)
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
