// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Emitter configuration
//!
//! Two knobs exist: the scheduler an emitter dispatches through, and whether
//! arguments are validated. Validation defaults to the process-wide mode read
//! once from `HAPPENED_ENV`.

use crate::error::EmitterError;
use crate::scheduler::{Deferred, Immediate, SchedulerRef};
use serde::Deserialize;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Environment variable selecting the process-wide validation mode
pub const ENV_VAR: &str = "HAPPENED_ENV";

static PROCESS_VALIDATION: LazyLock<Validation> =
    LazyLock::new(|| Validation::from_env_value(std::env::var(ENV_VAR).ok().as_deref()));

/// Whether argument contracts are checked at call time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    #[default]
    Enabled,
    /// "production" mode: checks are skipped
    Disabled,
}

impl Validation {
    /// Process-wide mode, read from the environment on first use
    pub fn process() -> Self {
        *PROCESS_VALIDATION
    }

    pub fn is_enabled(self) -> bool {
        self == Validation::Enabled
    }

    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("production") => Validation::Disabled,
            _ => Validation::Enabled,
        }
    }
}

/// Creation-time options for an [`Emitter`](crate::Emitter)
#[derive(Clone)]
pub struct EmitterConfig {
    /// `None` captures the process-wide default scheduler at creation
    pub scheduler: Option<SchedulerRef>,
    pub validation: Validation,
}

impl EmitterConfig {
    pub fn new() -> Self {
        Self {
            scheduler: None,
            validation: Validation::process(),
        }
    }

    pub fn with_scheduler(mut self, scheduler: SchedulerRef) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Parse options from JSON, e.g. `{"scheduler": "immediate", "validate": false}`
    pub fn from_json(json: &str) -> Result<Self, EmitterError> {
        let options: EmitterOptions = serde_json::from_str(json)
            .map_err(|e| EmitterError::invalid(format!("malformed emitter options: {e}")))?;
        Ok(options.into())
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EmitterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmitterConfig")
            .field("scheduler", &self.scheduler.as_ref().map(|s| s.name()))
            .field("validation", &self.validation)
            .finish()
    }
}

/// Serialized form of [`EmitterConfig`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmitterOptions {
    #[serde(default)]
    pub scheduler: Option<SchedulerKind>,
    #[serde(default)]
    pub validate: Option<bool>,
}

/// Built-in schedulers selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulerKind {
    #[serde(alias = "sync")]
    Immediate,
    Deferred,
}

impl SchedulerKind {
    pub fn build(self) -> SchedulerRef {
        match self {
            SchedulerKind::Immediate => Arc::new(Immediate),
            SchedulerKind::Deferred => Arc::new(Deferred::new()),
        }
    }
}

impl From<EmitterOptions> for EmitterConfig {
    fn from(options: EmitterOptions) -> Self {
        let mut config = EmitterConfig::new();
        if let Some(kind) = options.scheduler {
            config = config.with_scheduler(kind.build());
        }
        if let Some(validate) = options.validate {
            config = config.with_validation(if validate {
                Validation::Enabled
            } else {
                Validation::Disabled
            });
        }
        config
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
