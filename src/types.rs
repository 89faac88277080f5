//! Core data types for a probe run.

use std::process::ExitStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single successfully measured round-trip latency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// 1-based arrival order among successful extractions. This is not the
    /// probe's own icmp_seq: probes may report out-of-order or duplicate
    /// sequence numbers, which are ignored here.
    pub sequence_index: u32,

    /// Round-trip time in milliseconds. Non-negative.
    pub latency_ms: f64,
}

impl Sample {
    /// Create a sample at the given arrival position.
    pub fn new(sequence_index: u32, latency_ms: f64) -> Self {
        Self {
            sequence_index,
            latency_ms,
        }
    }
}

/// Final state of the probe child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitOutcome {
    /// Exited with status 0.
    Success,

    /// Exited with a non-zero status code.
    NonZero(i32),

    /// Terminated without an exit code (killed by a signal, including
    /// cancellation and timeout).
    Terminated,
}

impl ExitOutcome {
    /// Whether the probe process finished cleanly.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<ExitStatus> for ExitOutcome {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(0) => Self::Success,
            Some(code) => Self::NonZero(code),
            None => Self::Terminated,
        }
    }
}

impl std::fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::NonZero(code) => write!(f, "exit code {}", code),
            Self::Terminated => write!(f, "terminated by signal"),
        }
    }
}

/// The full record of one probe invocation: every sample in arrival order
/// plus the process outcome.
///
/// Mutated only by the stream collector while the probe runs; frozen once
/// the child process terminates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Probed host, as given. Opaque; validation is the caller's job.
    pub target: String,

    /// Number of probes requested at the boundary.
    pub requested_count: u32,

    /// Samples in strict arrival order. May be shorter than
    /// `requested_count` (failed probes produce no sample) or empty.
    pub samples: Vec<Sample>,

    /// Outcome of the probe child process.
    pub exit: ExitOutcome,

    /// When the probe process was launched.
    pub started_at: DateTime<Utc>,
}

impl RunResult {
    /// Latency values in arrival order.
    pub fn latencies(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.latency_ms).collect()
    }
}
