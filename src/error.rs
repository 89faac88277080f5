//! Run-level error types.
//!
//! Every fatal outcome of a probe run maps to one [`RunError`] variant,
//! which can be matched to determine the underlying cause (missing probe
//! binary, broken output stream, empty run, bad arguments).

use thiserror::Error;

/// Errors that can occur during a probe run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The probe executable could not be launched (missing binary,
    /// permission denied). No partial result exists.
    #[error("probe executable unavailable: {0}")]
    ProbeUnavailable(#[source] std::io::Error),

    /// The probe's output stream broke after a successful launch.
    /// Samples collected before the break are discarded: a truncated
    /// run would bias the statistics.
    #[error("probe output stream failed: {0}")]
    ProbeRuntime(#[source] std::io::Error),

    /// The probe ran to completion but produced zero extractable samples.
    #[error("no latency samples collected")]
    InsufficientData,

    /// Invalid run parameters. Caught at the CLI boundary, before the
    /// collector is constructed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl RunError {
    /// Classify an I/O error from spawning the probe process.
    ///
    /// A missing or unlaunchable binary is `ProbeUnavailable`; anything
    /// else at spawn time still means the probe never started.
    pub(crate) fn from_spawn(err: std::io::Error) -> Self {
        Self::ProbeUnavailable(err)
    }
}
