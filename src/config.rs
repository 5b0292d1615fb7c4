//! Runtime options for the VM.

use std::env;

pub const TRACE_ENV: &str = "YON_TRACE";
pub const STEP_LIMIT_ENV: &str = "YON_STEP_LIMIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VmConfig {
    /// Write the stack and the current instruction before every dispatch.
    pub trace: bool,
    /// Abort with a runtime error after this many dispatched instructions.
    pub step_limit: Option<u64>,
}

impl VmConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_step_limit(mut self, limit: Option<u64>) -> Self {
        self.step_limit = limit;
        self
    }

    /// Build a config from `YON_TRACE` and `YON_STEP_LIMIT`.
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`VmConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let trace = lookup(TRACE_ENV)
            .map(|raw| env_toggle_enabled(&raw))
            .unwrap_or(false);
        let step_limit = lookup(STEP_LIMIT_ENV).and_then(|raw| {
            let parsed = raw.trim().parse::<u64>();
            if parsed.is_err() {
                tracing::warn!(target: "yon::config", value = %raw, "ignoring invalid {}", STEP_LIMIT_ENV);
            }
            parsed.ok()
        });
        VmConfig { trace, step_limit }
    }
}

pub fn env_toggle_enabled(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
