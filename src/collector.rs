//! Stream collector: drives the probe runner and the latency extractor
//! together, turning a live probe process into a frozen [`RunResult`].
//!
//! [`RunResult`]: crate::types::RunResult

mod stream;

pub use stream::StreamCollector;
