//! Line-by-line collection of latency samples from a running probe.

use chrono::Utc;
use tokio::time::Instant;

use crate::config::ProbeConfig;
use crate::error::RunError;
use crate::probe::{extract_latency, ProbeRunner};
use crate::types::{ExitOutcome, RunResult, Sample};

/// Drives one probe run to completion.
///
/// A single logical consumer: lines are processed strictly in arrival
/// order, so sample sequence indices are globally ordered without any
/// locking. The child process is the only shared resource and it is owned
/// by the [`ProbeRunner`] for the duration of the run.
#[derive(Debug, Clone)]
pub struct StreamCollector {
    config: ProbeConfig,
}

impl StreamCollector {
    /// Create a collector for a validated configuration.
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    /// Run the probe and collect every extractable latency sample.
    ///
    /// Each raw output line is handed verbatim to `observe` before parsing,
    /// so display concerns never affect sample collection. Lines carrying a
    /// `time=<number>` token become [`Sample`]s with consecutive 1-based
    /// indices; everything else is observed and ignored.
    ///
    /// Zero samples is not an error at this layer; the boundary decides
    /// whether an empty result is fatal. A probe that exits non-zero but
    /// still produced samples yields those samples plus the non-zero
    /// outcome — partial success is preserved.
    ///
    /// If the configured deadline elapses the child is cancelled and the
    /// samples gathered so far are returned with
    /// [`ExitOutcome::Terminated`].
    ///
    /// # Errors
    /// - `RunError::ProbeUnavailable` if the probe cannot be launched.
    /// - `RunError::ProbeRuntime` if the output stream breaks mid-run; any
    ///   samples collected before the break are discarded.
    pub async fn run<F>(&self, mut observe: F) -> Result<RunResult, RunError>
    where
        F: FnMut(&str),
    {
        let started_at = Utc::now();
        let deadline = self.config.timeout.map(|t| Instant::now() + t);
        let mut runner = ProbeRunner::start(&self.config)?;

        tracing::info!(
            target = %self.config.target,
            count = self.config.count,
            "Probe run started"
        );

        let mut samples: Vec<Sample> = Vec::with_capacity(self.config.count as usize);
        let mut timed_out = false;

        loop {
            let next = match deadline {
                Some(deadline) => {
                    match tokio::time::timeout_at(deadline, runner.next_line()).await {
                        Ok(next) => next,
                        Err(_) => {
                            tracing::warn!(
                                target = %self.config.target,
                                collected = samples.len(),
                                "Run deadline elapsed, cancelling probe"
                            );
                            runner.cancel().await?;
                            timed_out = true;
                            break;
                        }
                    }
                }
                None => runner.next_line().await,
            };

            match next? {
                Some(line) => {
                    observe(&line);
                    if let Some(latency_ms) = extract_latency(&line) {
                        let index = samples.len() as u32 + 1;
                        samples.push(Sample::new(index, latency_ms));
                        tracing::trace!(index, latency_ms, "Sample extracted");
                    }
                }
                None => break,
            }
        }

        let exit = runner.wait().await?;
        // A cancelled child reports a signal death, but record Terminated
        // even if the probe won the race and exited on its own.
        let exit = if timed_out {
            ExitOutcome::Terminated
        } else {
            exit
        };

        tracing::info!(
            target = %self.config.target,
            collected = samples.len(),
            requested = self.config.count,
            exit = %exit,
            "Probe run finished"
        );

        Ok(RunResult {
            target: self.config.target.clone(),
            requested_count: self.config.count,
            samples,
            exit,
            started_at,
        })
    }
}
