//! Latency extraction from raw probe output lines.

use std::sync::OnceLock;

use regex::Regex;

/// Extract a round-trip latency (in milliseconds) from one line of probe
/// output.
///
/// Recognizes a decimal number immediately following the literal `time=`,
/// as printed by ping implementations:
///
/// ```text
/// 64 bytes from 142.250.183.36: icmp_seq=1 ttl=118 time=8.43 ms
/// ```
///
/// Only dot decimals are accepted (no thousands separators, no comma
/// decimals). Lines without the pattern, and lines where the token after
/// `time=` is not a valid number, return `None` — never an error.
pub fn extract_latency(line: &str) -> Option<f64> {
    static TIME_REGEX: OnceLock<Regex> = OnceLock::new();

    let regex = TIME_REGEX.get_or_init(|| {
        Regex::new(r"time=([0-9]+(?:\.[0-9]+)?)").expect("failed to compile latency regex")
    });

    let caps = regex.captures(line)?;
    caps[1].parse::<f64>().ok()
}
