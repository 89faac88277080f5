//! Probe run configuration.
//!
//! A [`ProbeConfig`] describes one probe run: the target host, how many
//! probes to send, which executable to drive, and an optional overall
//! deadline. Validation happens at the boundary, before a collector is
//! ever constructed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::RunError;

/// Minimum probe count for meaningful statistics.
pub const MIN_COUNT: u32 = 10;

/// Default probe executable.
pub const DEFAULT_PROBE_COMMAND: &str = "ping";

fn default_probe_command() -> String {
    DEFAULT_PROBE_COMMAND.to_string()
}

/// Configuration for a single probe run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Target host (hostname or IP address). Passed to the probe as a
    /// single discrete argument, never through a shell.
    pub target: String,

    /// Number of probes to request (minimum 10).
    pub count: u32,

    /// Probe executable to launch (default: "ping"). Must accept
    /// `-c <count> <target>`.
    #[serde(default = "default_probe_command")]
    pub probe_command: String,

    /// Optional deadline for the whole run. When it elapses the probe
    /// process is cancelled and the samples gathered so far are kept.
    #[serde(default, with = "humantime_serde::option")]
    pub timeout: Option<Duration>,
}

impl ProbeConfig {
    /// Create a new probe run configuration with defaults.
    pub fn new(target: impl Into<String>, count: u32) -> Self {
        Self {
            target: target.into(),
            count,
            probe_command: default_probe_command(),
            timeout: None,
        }
    }

    /// Set the probe executable.
    pub fn with_probe_command(mut self, command: impl Into<String>) -> Self {
        self.probe_command = command.into();
        self
    }

    /// Set the overall run deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns `RunError::InvalidArgument` if the count is below
    /// [`MIN_COUNT`] or the target is empty.
    pub fn validate(&self) -> Result<(), RunError> {
        if self.target.trim().is_empty() {
            return Err(RunError::InvalidArgument(
                "target must not be empty".to_string(),
            ));
        }
        if self.count < MIN_COUNT {
            return Err(RunError::InvalidArgument(format!(
                "probe count must be at least {} for meaningful statistics, got {}",
                MIN_COUNT, self.count
            )));
        }
        Ok(())
    }
}
