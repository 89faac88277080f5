//! Statistical summary of a finished sample sequence.
//!
//! Pure functions over a frozen slice of samples: central tendency,
//! dispersion, interpolated percentiles, and empirical sigma coverage.

use serde::{Deserialize, Serialize};

use crate::error::RunError;
use crate::types::Sample;

/// Sigma multipliers checked for empirical Gaussian coverage.
pub const SIGMA_LEVELS: [f64; 3] = [1.0, 2.0, 3.0];

/// Statistical summary of a latency sample sequence.
///
/// Derived once from a frozen [`RunResult`]; owns no state and is exactly
/// recomputable from the same samples.
///
/// [`RunResult`]: crate::types::RunResult
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticalSummary {
    /// Smallest observed latency (ms).
    pub min: f64,
    /// Largest observed latency (ms).
    pub max: f64,
    /// Arithmetic mean (ms).
    pub mean: f64,
    /// Population standard deviation (ms). Biased estimator, dividing by
    /// n rather than n-1, to match the reference report.
    pub stddev: f64,
    /// Median latency (ms).
    pub p50: f64,
    /// 90th percentile (ms).
    pub p90: f64,
    /// 95th percentile (ms).
    pub p95: f64,
    /// 99th percentile (ms).
    pub p99: f64,
    /// Percentage of samples within `mean ± kσ` for k = 1, 2, 3.
    pub sigma_coverage: [f64; 3],
}

impl StatisticalSummary {
    /// Empirical coverage for `mean ± kσ`, k in 1..=3.
    pub fn coverage(&self, k: usize) -> f64 {
        self.sigma_coverage[k - 1]
    }
}

/// Compute the statistical summary of a sample sequence.
///
/// # Errors
/// Returns `RunError::InsufficientData` for an empty sequence.
pub fn summarize(samples: &[Sample]) -> Result<StatisticalSummary, RunError> {
    if samples.is_empty() {
        return Err(RunError::InsufficientData);
    }

    let values: Vec<f64> = samples.iter().map(|s| s.latency_ms).collect();
    let n = values.len() as f64;

    // Two-pass mean / population stddev. Double-precision accumulation is
    // fine at the expected sample sizes (tens to low thousands).
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let stddev = variance.sqrt();

    let mut sorted = values.clone();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let sigma_coverage = SIGMA_LEVELS.map(|k| {
        let lower = mean - k * stddev;
        let upper = mean + k * stddev;
        let within = values
            .iter()
            .filter(|&&v| v >= lower && v <= upper)
            .count();
        within as f64 / n * 100.0
    });

    Ok(StatisticalSummary {
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        mean,
        stddev,
        p50: percentile(&sorted, 50.0),
        p90: percentile(&sorted, 90.0),
        p95: percentile(&sorted, 95.0),
        p99: percentile(&sorted, 99.0),
        sigma_coverage,
    })
}

/// Percentile by linear interpolation between order statistics.
///
/// For percentile `p` over `n` sorted values the rank is
/// `r = p/100 * (n-1)`; the result interpolates between the values at
/// `floor(r)` and `ceil(r)`. This is the default convention of the usual
/// numerical computing libraries (Hyndman & Fan type 7), so reported
/// figures are reproducible against them bit for bit.
///
/// # Panics
/// Panics if `sorted` is empty; callers go through [`summarize`], which
/// rejects empty input first.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=100.0).contains(&p));

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = p / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(values: &[f64]) -> Vec<Sample> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Sample::new(i as u32 + 1, v))
            .collect()
    }

    #[test]
    fn test_empty_sequence_is_insufficient_data() {
        let result = summarize(&[]);
        assert!(matches!(result, Err(RunError::InsufficientData)));
    }

    #[test]
    fn test_percentile_interpolation_midpoint() {
        // Rank for p50 over 4 values is 1.5: midpoint of 20 and 30.
        let s = samples(&[10.0, 20.0, 30.0, 40.0]);
        let summary = summarize(&s).unwrap();
        assert_eq!(summary.p50, 25.0);
    }

    #[test]
    fn test_percentile_monotonicity() {
        let s = samples(&[8.1, 9.7, 7.9, 22.4, 8.8, 9.1, 8.5, 35.0, 9.0, 8.2]);
        let summary = summarize(&s).unwrap();

        assert!(summary.min <= summary.p50);
        assert!(summary.p50 <= summary.p90);
        assert!(summary.p90 <= summary.p95);
        assert!(summary.p95 <= summary.p99);
        assert!(summary.p99 <= summary.max);
    }

    #[test]
    fn test_identical_values() {
        let s = samples(&[7.5; 25]);
        let summary = summarize(&s).unwrap();

        assert_eq!(summary.min, 7.5);
        assert_eq!(summary.max, 7.5);
        assert_eq!(summary.mean, 7.5);
        assert_eq!(summary.stddev, 0.0);
        assert_eq!(summary.p50, 7.5);
        assert_eq!(summary.p90, 7.5);
        assert_eq!(summary.p95, 7.5);
        assert_eq!(summary.p99, 7.5);
        assert_eq!(summary.sigma_coverage, [100.0, 100.0, 100.0]);
    }

    #[test]
    fn test_population_stddev() {
        // Population stddev of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2
        // (the sample estimator would give ~2.138).
        let s = samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let summary = summarize(&s).unwrap();
        assert_eq!(summary.mean, 5.0);
        assert!((summary.stddev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sigma_coverage_one_outlier_in_twenty() {
        // 19 samples tightly clustered, one far outlier: the outlier falls
        // outside mean ± 2σ, so 2-sigma coverage is exactly 95%.
        let mut values = vec![10.0; 19];
        values.push(100.0);
        let summary = summarize(&samples(&values)).unwrap();

        assert_eq!(summary.coverage(1), 95.0);
        assert_eq!(summary.coverage(2), 95.0);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let s = samples(&[8.43, 9.12, 7.88, 8.90, 10.34, 8.11, 9.55, 8.76, 9.01, 8.39]);
        let first = summarize(&s).unwrap();
        let second = summarize(&s).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_percentile_numpy_convention() {
        // np.percentile([1..5], 25) == 2.0; ([1..4], 75) == 3.25
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile(&sorted, 25.0), 2.0);
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&sorted, 75.0), 3.25);
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(percentile(&[42.0], 99.0), 42.0);
    }
}
