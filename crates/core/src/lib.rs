//! happened: in-process publish/subscribe event dispatcher
//!
//! This crate provides:
//! - [`Emitter`] - named events with `on`, `once`, `off` and `trigger`
//! - Schedulers deciding when a trigger's callbacks run ([`SYNC`],
//!   [`Deferred`], [`TaskQueue`], or any `Fn(Work)`)
//! - [`channel`] - process-wide named emitters, plus a [`global`] one
//! - [`add_to`] - attach an emitter's operations to a host type
//!
//! ```
//! use happened::{Callback, Emitter, EmitterConfig, SYNC};
//! use std::sync::Arc;
//!
//! let emitter = Emitter::with_config(EmitterConfig::new().with_scheduler(Arc::new(SYNC)));
//! let greet = Callback::new(|call| println!("hello {:?}", call.args()));
//! emitter.on("greet", greet.clone())?;
//! emitter.trigger("greet", vec!["world".into()])?;
//! emitter.off(Some("greet"), Some(&greet))?;
//! # Ok::<(), happened::EmitterError>(())
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod callback;
pub mod channel;
pub mod config;
pub mod emitter;
pub mod error;
pub mod mixin;
pub mod scheduler;

#[cfg(test)]
mod test_support;

// Re-exports
pub use callback::{Call, Callback, Receiver};
pub use channel::{channel, global};
pub use config::{EmitterConfig, EmitterOptions, SchedulerKind, Validation};
pub use emitter::{all_events, create, Emitter, SubscriptionId, ALL_EVENTS};
pub use error::EmitterError;
pub use mixin::{add_to, EmitterSlot, Host, HostEvents};
pub use scheduler::{
    default_scheduler, set_default_scheduler, Deferred, Immediate, Scheduler, SchedulerRef,
    TaskQueue, Work, SYNC,
};
