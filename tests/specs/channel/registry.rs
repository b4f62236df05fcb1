//! Channel specs
//!
//! Verify lookup-or-create identity of named emitters.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn same_name_is_same_instance() {
    let a = channel("specs:x").unwrap();
    let b = channel("specs:x").unwrap();
    assert!(a.ptr_eq(&b));
}

#[test]
fn different_names_are_different_instances() {
    let x = channel("specs:distinct-x").unwrap();
    let y = channel("specs:distinct-y").unwrap();
    assert!(!x.ptr_eq(&y));
}

#[test]
fn subscriptions_survive_between_lookups() {
    let recorder = Recorder::new();
    channel("specs:shared")
        .unwrap()
        .on("ping", recorder.callback("ping"))
        .unwrap();

    assert_eq!(channel("specs:shared").unwrap().subscriber_count("ping"), 1);
}

#[test]
fn global_emitter_is_always_available() {
    assert!(happened::global().ptr_eq(happened::global()));
}
