//! Probe process layer: launching the latency probe and parsing its output.
//!
//! - [`ProbeRunner`]: owns the child-process lifecycle and exposes its
//!   merged stdout/stderr as an incrementally produced line sequence
//! - [`extract_latency`]: pure line-to-latency extraction

mod extract;
mod runner;

pub use extract::extract_latency;
pub use runner::ProbeRunner;
