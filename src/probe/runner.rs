//! Probe child-process lifecycle.

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::process::{Child, ChildStderr, ChildStdout, Command};

use crate::config::ProbeConfig;
use crate::error::RunError;
use crate::types::ExitOutcome;

/// A running probe process exposing its output as a lazily produced
/// sequence of text lines.
///
/// stdout and stderr are both piped and merged into one sequence, so
/// probe error messages arrive alongside echo replies. Lines are produced
/// as the child emits them, not buffered until exit.
///
/// The runner exclusively owns the child from launch until [`wait`] or
/// [`cancel`] returns; `kill_on_drop` guarantees an abandoned runner never
/// leaks a process.
///
/// [`wait`]: ProbeRunner::wait
/// [`cancel`]: ProbeRunner::cancel
pub struct ProbeRunner {
    child: Child,
    stdout: Option<Lines<BufReader<ChildStdout>>>,
    stderr: Option<Lines<BufReader<ChildStderr>>>,
}

impl ProbeRunner {
    /// Launch the probe process for the given run configuration.
    ///
    /// The invocation is `<probe_command> -c <count> <target>`. The target
    /// is passed as a single discrete argument; no shell is involved, so
    /// the target string cannot inject arguments or shell syntax.
    ///
    /// # Errors
    /// Returns `RunError::ProbeUnavailable` if the executable cannot be
    /// located or launched.
    pub fn start(config: &ProbeConfig) -> Result<Self, RunError> {
        tracing::debug!(
            probe = %config.probe_command,
            target = %config.target,
            count = config.count,
            "Launching probe process"
        );

        let mut child = Command::new(&config.probe_command)
            .arg("-c")
            .arg(config.count.to_string())
            .arg(&config.target)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(RunError::from_spawn)?;

        let stdout = child
            .stdout
            .take()
            .map(|out| BufReader::new(out).lines());
        let stderr = child
            .stderr
            .take()
            .map(|err| BufReader::new(err).lines());

        Ok(Self {
            child,
            stdout,
            stderr,
        })
    }

    /// Produce the next output line, suspending until one is available.
    ///
    /// Returns `Ok(None)` once both streams have reached end-of-file,
    /// which happens when the child exits or is killed.
    ///
    /// # Errors
    /// Returns `RunError::ProbeRuntime` if either stream fails mid-read.
    pub async fn next_line(&mut self) -> Result<Option<String>, RunError> {
        loop {
            match (self.stdout.as_mut(), self.stderr.as_mut()) {
                (Some(out), Some(err)) => {
                    tokio::select! {
                        line = out.next_line() => match line.map_err(RunError::ProbeRuntime)? {
                            Some(line) => return Ok(Some(line)),
                            None => self.stdout = None,
                        },
                        line = err.next_line() => match line.map_err(RunError::ProbeRuntime)? {
                            Some(line) => return Ok(Some(line)),
                            None => self.stderr = None,
                        },
                    }
                }
                (Some(out), None) => {
                    match out.next_line().await.map_err(RunError::ProbeRuntime)? {
                        Some(line) => return Ok(Some(line)),
                        None => self.stdout = None,
                    }
                }
                (None, Some(err)) => {
                    match err.next_line().await.map_err(RunError::ProbeRuntime)? {
                        Some(line) => return Ok(Some(line)),
                        None => self.stderr = None,
                    }
                }
                (None, None) => return Ok(None),
            }
        }
    }

    /// Wait for the child to terminate and return its outcome.
    ///
    /// May be called after the line sequence is exhausted.
    ///
    /// # Errors
    /// Returns `RunError::ProbeRuntime` if the child's status cannot be
    /// collected.
    pub async fn wait(&mut self) -> Result<ExitOutcome, RunError> {
        let status = self
            .child
            .wait()
            .await
            .map_err(RunError::ProbeRuntime)?;
        Ok(ExitOutcome::from(status))
    }

    /// Terminate the child process promptly.
    ///
    /// Killing the child closes its pipes, so any pending [`next_line`]
    /// observes end-of-file instead of blocking forever.
    ///
    /// [`next_line`]: ProbeRunner::next_line
    pub async fn cancel(&mut self) -> Result<(), RunError> {
        tracing::debug!("Cancelling probe process");
        self.child.kill().await.map_err(RunError::ProbeRuntime)
    }
}

impl std::fmt::Debug for ProbeRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeRunner")
            .field("pid", &self.child.id())
            .finish_non_exhaustive()
    }
}
