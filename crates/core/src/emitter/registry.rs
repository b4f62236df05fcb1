// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-emitter subscription registry

use super::subscription::{Subscription, SubscriptionId};
use crate::callback::Callback;
use std::collections::HashMap;

/// Event name to subscriptions, each list in subscription order
#[derive(Default)]
pub(crate) struct Registry {
    lists: HashMap<String, Vec<Subscription>>,
}

impl Registry {
    pub fn push(&mut self, name: &str, subscription: Subscription) {
        self.lists
            .entry(name.to_string())
            .or_default()
            .push(subscription);
    }

    /// Remove every record matching `callback`, returning how many went
    pub fn remove_callback(&mut self, name: &str, callback: &Callback) -> usize {
        let Some(list) = self.lists.get_mut(name) else {
            return 0;
        };
        let before = list.len();
        list.retain(|s| !s.matches(callback));
        before - list.len()
    }

    pub fn remove_id(&mut self, name: &str, id: SubscriptionId) -> bool {
        let Some(list) = self.lists.get_mut(name) else {
            return false;
        };
        let before = list.len();
        list.retain(|s| s.id != id);
        before != list.len()
    }

    /// Empty the list for `name`; the key stays
    pub fn clear_name(&mut self, name: &str) {
        if let Some(list) = self.lists.get_mut(name) {
            list.clear();
        }
    }

    pub fn clear(&mut self) {
        self.lists.clear();
    }

    /// Copy of the list for `name`, or `None` if it is absent or empty
    pub fn snapshot(&self, name: &str) -> Option<Vec<Subscription>> {
        self.lists
            .get(name)
            .filter(|list| !list.is_empty())
            .cloned()
    }

    pub fn count(&self, name: &str) -> usize {
        self.lists.get(name).map_or(0, Vec::len)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
