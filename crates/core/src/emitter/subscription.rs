// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscription records

use crate::callback::{Callback, Receiver};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique subscription handle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One registered callback
///
/// `dispatch` is what runs. For `once` it is a wrapper and `original` holds
/// the caller's callback so `off` can match either.
#[derive(Clone)]
pub(crate) struct Subscription {
    pub id: SubscriptionId,
    pub receiver: Option<Receiver>,
    pub original: Option<Callback>,
    pub dispatch: Callback,
}

impl Subscription {
    pub fn new(dispatch: Callback, receiver: Option<Receiver>) -> Self {
        Self {
            id: SubscriptionId::next(),
            receiver,
            original: None,
            dispatch,
        }
    }

    pub fn wrapping(
        id: SubscriptionId,
        dispatch: Callback,
        original: Callback,
        receiver: Option<Receiver>,
    ) -> Self {
        Self {
            id,
            receiver,
            original: Some(original),
            dispatch,
        }
    }

    /// True if `callback` is this record's dispatch or original function
    pub fn matches(&self, callback: &Callback) -> bool {
        self.dispatch.same(callback)
            || self
                .original
                .as_ref()
                .is_some_and(|original| original.same(callback))
    }
}
