/// Report driver: normalize, optionally diff, render, write.
///
/// With one dataset the report is the flat grouped table; with two it is the
/// comparison of the primary (A, baseline) against the secondary (B). Chunks
/// are written to the sink in order and the first failure aborts the report.
use std::fmt;
use std::io::Write;

use thiserror::Error;

use crate::diff::{DiffSummary, diff};
use crate::error::DatasetError;
use crate::group::group_by_resolution;
use crate::normalize::{NormalizeOptions, normalize};
use crate::record::{Dataset, Pattern};
use crate::render::{Palette, RenderFormat, RenderLabels};

/// Which input a dataset error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetRole {
    /// The only dataset of a flat report.
    Input,
    /// Baseline of a comparison.
    A,
    /// Candidate of a comparison.
    B,
}

impl fmt::Display for DatasetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetRole::Input => f.write_str("input"),
            DatasetRole::A => f.write_str("A"),
            DatasetRole::B => f.write_str("B"),
        }
    }
}

/// Failure while producing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A dataset could not be normalized.
    #[error("dataset {role}: {source}")]
    Dataset {
        /// Which dataset failed.
        role: DatasetRole,
        /// Underlying error.
        #[source]
        source: DatasetError,
    },
    /// Writing to the sink failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Options for [`write_report`].
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Output format.
    pub format: RenderFormat,
    /// Report title; defaults to `"{id} {version_id}: {pattern}"` of the
    /// primary dataset.
    pub title: Option<String>,
    /// Styling for text output.
    pub palette: Palette,
    /// Normalization applied to every dataset.
    pub normalize: NormalizeOptions,
}

/// Whether a report was a flat table or a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Single-dataset table.
    Table,
    /// Two-dataset comparison.
    Diff,
}

/// What [`write_report`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOutcome {
    /// Flat or comparison.
    pub mode: ReportMode,
    /// Number of chunks written to the sink.
    pub chunks: usize,
    /// Diff counts; `None` in table mode.
    pub summary: Option<DiffSummary>,
}

/// Renders `primary` (and optionally its comparison with `secondary`) to
/// `sink`.
///
/// # Errors
///
/// - [`ReportError::Dataset`] when a dataset fails to normalize; nothing has
///   been written at that point.
/// - [`ReportError::Io`] when the sink fails; output written before the
///   failure is left in place.
pub fn write_report<W: Write + ?Sized>(
    sink: &mut W,
    primary: &Dataset,
    secondary: Option<&Dataset>,
    options: &ReportOptions,
) -> Result<ReportOutcome, ReportError> {
    let title = options
        .title
        .clone()
        .unwrap_or_else(|| primary.default_title());

    match secondary {
        None => {
            let table = normalize(primary, &options.normalize).map_err(|source| {
                ReportError::Dataset {
                    role: DatasetRole::Input,
                    source,
                }
            })?;
            let groups = group_by_resolution(&table);
            let labels = RenderLabels {
                title,
                image: pattern_label(primary),
                diff_image: String::new(),
            };
            let renderer = options.format.renderer(labels, options.palette);
            let chunks = write_chunks(sink, renderer.render_table(&groups))?;
            tracing::info!(chunks, groups = groups.len(), "wrote table report");
            Ok(ReportOutcome {
                mode: ReportMode::Table,
                chunks,
                summary: None,
            })
        }
        Some(secondary) => {
            let a = normalize(primary, &options.normalize).map_err(|source| {
                ReportError::Dataset {
                    role: DatasetRole::A,
                    source,
                }
            })?;
            let b = normalize(secondary, &options.normalize).map_err(|source| {
                ReportError::Dataset {
                    role: DatasetRole::B,
                    source,
                }
            })?;
            let result = diff(&a, &b);
            let (image, diff_image) = comparison_labels(primary, secondary);
            let labels = RenderLabels {
                title,
                image,
                diff_image,
            };
            let renderer = options.format.renderer(labels, options.palette);
            let chunks = write_chunks(sink, renderer.render_diff(&result))?;
            let summary = result.summary();
            tracing::info!(chunks, %summary, "wrote diff report");
            Ok(ReportOutcome {
                mode: ReportMode::Diff,
                chunks,
                summary: Some(summary),
            })
        }
    }
}

fn write_chunks<W, I>(sink: &mut W, chunks: I) -> Result<usize, std::io::Error>
where
    W: Write + ?Sized,
    I: Iterator<Item = String>,
{
    let mut written = 0usize;
    for chunk in chunks {
        sink.write_all(chunk.as_bytes())?;
        written += 1;
    }
    sink.flush()?;
    Ok(written)
}

fn pattern_label(dataset: &Dataset) -> String {
    dataset
        .pattern
        .as_ref()
        .map_or_else(|| "unknown".to_owned(), Pattern::to_string)
}

/// Captions for the two sides of a comparison.
///
/// Patterns tell the sides apart when they differ; otherwise the
/// `id:version_id` image labels are used.
fn comparison_labels(a: &Dataset, b: &Dataset) -> (String, String) {
    if a.pattern != b.pattern {
        (pattern_label(a), pattern_label(b))
    } else {
        (a.image_label(), b.image_label())
    }
}
