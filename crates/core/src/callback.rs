// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscriber callbacks and the view they receive

use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Optional value bound to a subscription, handed back on every call
pub type Receiver = Arc<dyn Any + Send + Sync>;

type CallbackFn = dyn Fn(&Call<'_>) + Send + Sync;

/// A subscriber function
///
/// Cloning is cheap and clones share identity: `off` removes a subscription
/// when given the same handle (or a clone of it) that was subscribed.
#[derive(Clone)]
pub struct Callback(Arc<CallbackFn>);

impl Callback {
    pub fn new(f: impl Fn(&Call<'_>) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// True if both handles refer to the same function
    pub fn same(&self, other: &Callback) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn invoke(&self, call: &Call<'_>) {
        (self.0)(call)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Arc::as_ptr(&self.0))
    }
}

/// What a callback sees when it runs
///
/// Named-event subscribers get the trigger arguments as-is. All-events
/// subscribers get exactly two arguments, the event name and an array of
/// the trigger arguments; [`Call::event`] unpacks that shape.
pub struct Call<'a> {
    receiver: Option<&'a Receiver>,
    args: &'a [Value],
}

impl<'a> Call<'a> {
    pub(crate) fn new(receiver: Option<&'a Receiver>, args: &'a [Value]) -> Self {
        Self { receiver, args }
    }

    pub fn args(&self) -> &'a [Value] {
        self.args
    }

    pub fn arg(&self, index: usize) -> Option<&'a Value> {
        self.args.get(index)
    }

    /// The bound receiver, if one was given and it has type `T`
    pub fn receiver<T: Any>(&self) -> Option<&'a T> {
        self.receiver.and_then(|r| r.downcast_ref::<T>())
    }

    /// Unpack the all-events calling convention into `(event_name, args)`
    pub fn event(&self) -> Option<(&'a str, &'a [Value])> {
        match self.args {
            [Value::String(name), Value::Array(args)] => Some((name.as_str(), args.as_slice())),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "callback_tests.rs"]
mod tests;
