//! Human-readable text reports over a statistical summary.
//!
//! Pure formatting with fixed field widths and fixed decimal precision
//! (3 places for latency figures, 1 for coverage percentages), so output
//! stays diff-stable run to run and can be compared visually.

use std::fmt::Write;

use crate::stats::StatisticalSummary;

/// Theoretical Gaussian coverage for 1, 2 and 3 sigma.
const THEORETICAL_COVERAGE: [f64; 3] = [68.3, 95.0, 99.7];

/// Render the standard summary and percentile report.
pub fn render(summary: &StatisticalSummary) -> String {
    let mut out = String::new();

    out.push_str("--- Standard Ping Summary ---\n");
    let _ = writeln!(
        out,
        "round-trip min/avg/max/stddev = {:.3}/{:.3}/{:.3}/{:.3} ms",
        summary.min, summary.mean, summary.max, summary.stddev
    );

    out.push_str("\n--- Enhanced Stability Analysis (Percentiles) ---\n");
    let _ = writeln!(
        out,
        "Median Latency (p50):      {:>8.3} ms   (50% of pings were faster than this)",
        summary.p50
    );
    let _ = writeln!(
        out,
        "90th Percentile (p90):     {:>8.3} ms   (90% of pings were faster than this)",
        summary.p90
    );
    let _ = writeln!(
        out,
        "95th Percentile (p95):     {:>8.3} ms   (95% of pings were faster than this)",
        summary.p95
    );
    let _ = writeln!(
        out,
        "99th Percentile (p99):     {:>8.3} ms   (Ignoring the worst 1% of pings)",
        summary.p99
    );

    out
}

/// Render the sigma-coverage (bell curve) report section.
///
/// Range lower bounds are floored at zero for display only — latency
/// cannot be negative — while the coverage figures themselves come from
/// the unclamped interval.
pub fn render_sigma(summary: &StatisticalSummary) -> String {
    let mut out = String::new();

    out.push_str("--- Bell Curve Analysis (Sigma Perspective) ---\n");
    let _ = writeln!(
        out,
        "Based on Avg: {:.3} ms and StdDev: {:.3} ms",
        summary.mean, summary.stddev
    );

    for (i, theory) in THEORETICAL_COVERAGE.iter().enumerate() {
        let level = i + 1;
        let k = level as f64;
        let lower = (summary.mean - k * summary.stddev).max(0.0);
        let upper = summary.mean + k * summary.stddev;

        let _ = writeln!(
            out,
            "Range for {level}-sigma (\u{00b1}{level}\u{03c3}):   {lower:>6.2} ms to {upper:>6.2} ms",
        );
        let _ = writeln!(
            out,
            "  - In theory, this covers {theory}% of data. Your actual coverage: {:.1}%",
            summary.sigma_coverage[i]
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> StatisticalSummary {
        StatisticalSummary {
            min: 7.882,
            max: 35.04,
            mean: 9.4567,
            stddev: 1.2345,
            p50: 8.9,
            p90: 10.234,
            p95: 12.5,
            p99: 30.1,
            sigma_coverage: [90.0, 95.0, 100.0],
        }
    }

    #[test]
    fn test_render_round_trip_line() {
        let report = render(&summary());
        assert!(report.contains("round-trip min/avg/max/stddev = 7.882/9.457/35.040/1.234 ms"));
    }

    #[test]
    fn test_render_percentile_columns_are_fixed_width() {
        let report = render(&summary());
        let expected_p50 = format!("Median Latency (p50):      {:>8.3} ms", 8.9);
        let expected_p99 = format!("99th Percentile (p99):     {:>8.3} ms", 30.1);
        assert!(report.contains(&expected_p50));
        assert!(report.contains(&expected_p99));
    }

    #[test]
    fn test_render_is_deterministic() {
        let s = summary();
        assert_eq!(render(&s), render(&s));
        assert_eq!(render_sigma(&s), render_sigma(&s));
    }

    #[test]
    fn test_render_sigma_coverage_lines() {
        let report = render_sigma(&summary());
        assert!(report.contains("Based on Avg: 9.457 ms and StdDev: 1.234 ms"));
        assert!(report.contains("covers 95% of data. Your actual coverage: 95.0%"));
        assert!(report.contains("covers 99.7% of data. Your actual coverage: 100.0%"));
    }

    #[test]
    fn test_render_sigma_floors_range_at_zero() {
        let mut s = summary();
        s.mean = 1.0;
        s.stddev = 2.0;
        let report = render_sigma(&s);
        // 1.0 - 2*2.0 is negative; display floors it at zero.
        let expected = format!(
            "Range for 2-sigma (\u{00b1}2\u{03c3}):   {:>6.2} ms to {:>6.2} ms",
            0.0, 5.0
        );
        assert!(report.contains(&expected));
    }
}
