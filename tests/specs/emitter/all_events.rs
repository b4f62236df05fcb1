//! All-events specs
//!
//! Verify the wildcard subscription and its calling convention.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn receives_every_event_with_name_and_args() {
    let emitter = sync_emitter();
    let recorder = Recorder::new();
    emitter.on(all_events(), recorder.callback("all")).unwrap();

    emitter.trigger("foo", vec![json!(1), json!(2)]).unwrap();
    emitter.trigger("bar", vec![]).unwrap();

    assert_eq!(
        recorder.calls(),
        vec![
            ("all".to_string(), vec![json!("foo"), json!([1, 2])]),
            ("all".to_string(), vec![json!("bar"), json!([])]),
        ]
    );
}

#[test]
fn call_event_unpacks_name_and_args() {
    let emitter = sync_emitter();
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    emitter
        .on(
            emitter.all_events(),
            Callback::new(move |call| {
                if let Some((name, args)) = call.event() {
                    sink.lock().unwrap().push((name.to_string(), args.len()));
                }
            }),
        )
        .unwrap();

    emitter.trigger("saved", vec![json!("a"), json!("b")]).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![("saved".to_string(), 2)]);
}

#[test]
fn runs_after_named_subscribers() {
    let emitter = sync_emitter();
    let recorder = Recorder::new();
    emitter.on(all_events(), recorder.callback("all")).unwrap();
    emitter.on("foo", recorder.callback("named")).unwrap();

    emitter.trigger("foo", vec![]).unwrap();

    assert_eq!(recorder.labels(), labels(&["named", "all"]));
}

#[test]
fn can_be_unsubscribed() {
    let emitter = sync_emitter();
    let recorder = Recorder::new();
    let cb = recorder.callback("all");
    emitter.on(all_events(), cb.clone()).unwrap();

    emitter.off(Some(all_events()), Some(&cb)).unwrap();
    emitter.trigger("foo", vec![]).unwrap();

    assert!(recorder.calls().is_empty());
}

#[test]
fn sentinel_cannot_be_triggered() {
    let emitter = sync_emitter();
    assert!(emitter.trigger(all_events(), vec![]).is_err());
}
