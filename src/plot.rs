//! Plot collaborator boundary.
//!
//! Plotting is an external concern: the core hands over the raw samples
//! and the finished summary, and whatever happens here must never corrupt
//! or suppress the already-printed text report. The shipped collaborator
//! exports a JSON dataset that an external renderer can consume.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::stats::StatisticalSummary;
use crate::types::Sample;

/// Errors from a plot collaborator.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Failed to write the plot artifact.
    #[error("failed to write plot artifact: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the dataset.
    #[error("failed to serialize plot dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// Consumer of a finished run's samples and summary.
///
/// Implementations run after the text report has been printed; their
/// errors are reported but never fatal to the run.
pub trait Plotter {
    /// Produce a visual artifact (or the data for one) from the run.
    ///
    /// With `save_path` the artifact is persisted there; without it the
    /// collaborator may present interactively or write to stdout.
    fn plot(
        &self,
        samples: &[Sample],
        summary: &StatisticalSummary,
        target: &str,
        save_path: Option<&Path>,
    ) -> Result<(), PlotError>;
}

/// Everything a renderer needs to draw the latency-over-time chart:
/// the sample series plus the horizontal reference lines (mean, p95, p99).
#[derive(Debug, Serialize)]
struct PlotDataset<'a> {
    target: &'a str,
    generated_at: DateTime<Utc>,
    samples: &'a [Sample],
    summary: &'a StatisticalSummary,
}

/// Plot collaborator that emits the run as a JSON dataset.
#[derive(Debug, Default)]
pub struct JsonDatasetPlotter;

impl Plotter for JsonDatasetPlotter {
    fn plot(
        &self,
        samples: &[Sample],
        summary: &StatisticalSummary,
        target: &str,
        save_path: Option<&Path>,
    ) -> Result<(), PlotError> {
        let dataset = PlotDataset {
            target,
            generated_at: Utc::now(),
            samples,
            summary,
        };

        let json = serde_json::to_string_pretty(&dataset)?;
        match save_path {
            Some(path) => {
                std::fs::write(path, json)?;
                tracing::info!(path = %path.display(), "Plot dataset saved");
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}
