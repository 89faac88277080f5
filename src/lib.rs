//! pingstat - Network Stability Tester
//!
//! This crate measures network stability by driving an external
//! round-trip latency probe (the system `ping` utility), consuming its
//! output as it streams, and computing detailed latency statistics.
//! It can be used as a library by other Rust projects, or run as a
//! standalone binary with the `pingstat` executable.
//!
//! # Architecture
//!
//! - **Probe**: child-process lifecycle and line-level latency extraction
//! - **Collector**: drives one probe run into a frozen [`RunResult`]
//! - **Stats**: percentiles, dispersion and sigma coverage over the samples
//! - **Report**: fixed-format text rendering of the summary
//! - **Plot**: boundary contract for external visualization
//!
//! # Example
//!
//! ```rust,no_run
//! use pingstat::{ProbeConfig, StreamCollector};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), pingstat::RunError> {
//! let config = ProbeConfig::new("8.8.8.8", 20);
//! config.validate()?;
//!
//! let result = StreamCollector::new(config).run(|line| println!("{line}")).await?;
//! let summary = pingstat::stats::summarize(&result.samples)?;
//! print!("{}", pingstat::report::render(&summary));
//! # Ok(())
//! # }
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod plot;
pub mod probe;
pub mod report;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use collector::StreamCollector;
pub use config::{ProbeConfig, MIN_COUNT};
pub use error::RunError;
pub use plot::{JsonDatasetPlotter, PlotError, Plotter};
pub use probe::{extract_latency, ProbeRunner};
pub use stats::{summarize, StatisticalSummary};
pub use types::{ExitOutcome, RunResult, Sample};
