//! Implementation of `fontquery table <file>`.
//!
//! Parses one captured dataset and writes its grouped resolution table in
//! the selected renderer to stdout or `--output`.
//!
//! Exit codes: 0 = success, 2 = read, parse or write failure.
use std::time::Instant;

use fontquery_core::write_report;

use super::{load_dataset, report_failure, report_options};
use crate::error::CliError;
use crate::format::{FormatterConfig, report_timing};
use crate::io::{open_output, output_label};
use crate::{PathOrStdin, ReportArgs};

/// Runs the `table` command.
///
/// # Errors
///
/// - Input errors from [`load_dataset`] (exit 2).
/// - [`CliError::Dataset`] when the dataset fails normalization.
/// - [`CliError::OutputError`] when the report cannot be written.
pub fn run(
    file: &PathOrStdin,
    args: &ReportArgs,
    max_file_size: u64,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let parse_start = Instant::now();
    let dataset = load_dataset(file, max_file_size)?;
    report_timing("parsed", parse_start.elapsed(), config)?;

    let options = report_options(args, config);
    let output = output_label(args.output.as_deref());
    let mut sink = open_output(args.output.as_deref())?;

    let render_start = Instant::now();
    match write_report(&mut *sink, &dataset, None, &options) {
        Ok(outcome) => {
            tracing::debug!(chunks = outcome.chunks, output = %output, "table written");
        }
        Err(err) => report_failure(err, (file, None), &output)?,
    }
    report_timing("rendered", render_start.elapsed(), config)
}
