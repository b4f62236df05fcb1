//! Mixin specs
//!
//! Verify that a host with an attached emitter shares its state.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[derive(Default)]
struct Widget {
    events: EmitterSlot,
}

impl Host for Widget {
    fn emitter_slot(&self) -> &EmitterSlot {
        &self.events
    }
}

#[test]
fn host_trigger_matches_instance_trigger() {
    let widget = Widget::default();
    let emitter = add_to(&widget, Some(sync_emitter()));
    let recorder = Recorder::new();
    emitter.on("x", recorder.callback("cb")).unwrap();

    widget.trigger("x", vec![json!("host")]).unwrap();
    emitter.trigger("x", vec![json!("instance")]).unwrap();

    assert_eq!(
        recorder.calls(),
        vec![
            ("cb".to_string(), vec![json!("host")]),
            ("cb".to_string(), vec![json!("instance")]),
        ]
    );
}

#[test]
fn host_subscriptions_are_visible_on_the_instance() {
    let widget = Widget::default();
    let emitter = add_to(&widget, Some(sync_emitter()));
    let cb = Callback::new(|_| {});

    widget.on("x", cb.clone()).unwrap();
    assert_eq!(emitter.subscriber_count("x"), 1);

    widget.off(Some("x"), Some(&cb)).unwrap();
    assert_eq!(emitter.subscriber_count("x"), 0);
}

#[test]
fn add_to_returns_the_given_instance() {
    let widget = Widget::default();
    let instance = sync_emitter();
    assert!(add_to(&widget, Some(instance.clone())).ptr_eq(&instance));
    assert_eq!(widget.all_events(), all_events());
}
