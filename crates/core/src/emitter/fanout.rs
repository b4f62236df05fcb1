// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One trigger's batch of callback invocations

use super::subscription::Subscription;
use crate::callback::Call;
use serde_json::Value;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Snapshotted subscribers plus the arguments to call them with
pub(super) struct Fanout {
    event: String,
    args: Vec<Value>,
    named: Vec<Subscription>,
    all: Vec<Subscription>,
}

impl Fanout {
    pub fn new(event: &str, args: Vec<Value>, named: Vec<Subscription>, all: Vec<Subscription>) -> Self {
        Self {
            event: event.to_string(),
            args,
            named,
            all,
        }
    }

    pub fn named_len(&self) -> usize {
        self.named.len()
    }

    pub fn all_len(&self) -> usize {
        self.all.len()
    }

    /// Named subscribers first, then all-events subscribers, each in
    /// subscription order. Returns the number of subscribers that panicked.
    pub fn run(self) -> usize {
        let Fanout {
            event,
            args,
            named,
            all,
        } = self;
        let mut failed = 0;

        for (position, subscription) in named.iter().enumerate() {
            if let Err(message) = invoke(subscription, &args) {
                tracing::error!(event = %event, position, panic = %message, "subscriber panicked");
                failed += 1;
            }
        }

        if !all.is_empty() {
            let all_args = [Value::String(event.clone()), Value::Array(args)];
            for (position, subscription) in all.iter().enumerate() {
                if let Err(message) = invoke(subscription, &all_args) {
                    tracing::error!(
                        event = %event,
                        position,
                        panic = %message,
                        "all-events subscriber panicked"
                    );
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            tracing::error!(event = %event, failed, "fan-out finished with failed subscribers");
        }
        failed
    }
}

fn invoke(subscription: &Subscription, args: &[Value]) -> Result<(), String> {
    let call = Call::new(subscription.receiver.as_ref(), args);
    panic::catch_unwind(AssertUnwindSafe(|| subscription.dispatch.invoke(&call)))
        .map_err(panic_message)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "non-string panic payload".to_string()
}

#[cfg(test)]
#[path = "fanout_tests.rs"]
mod tests;
