//! Implementation of `fontquery diff <a> <b>`.
//!
//! Parses two captured datasets, compares B against the baseline A, and
//! writes the comparison report to stdout or `--output`.
//!
//! Flags:
//! - `--summary-only`: print only the summary line (or the summary object
//!   with `--render json`).
//! - `--exit-code`: exit 1 when the datasets differ.
//!
//! Exit codes:
//! - 0 = success (or no differences with `--exit-code`)
//! - 1 = differences found with `--exit-code`
//! - 2 = read, parse or write failure on either input
use std::io::Write;
use std::time::Instant;

use fontquery_core::{
    Dataset, DiffSummary, LanguageTable, NormalizeOptions, RenderFormat, diff, normalize,
    write_report,
};

use super::{load_dataset, report_failure, report_options};
use crate::error::CliError;
use crate::format::{FormatterConfig, report_timing, write_summary};
use crate::io::{open_output, output_label};
use crate::{PathOrStdin, ReportArgs};

/// Parsed arguments of `fontquery diff`.
#[derive(Debug, Clone, Copy)]
pub struct DiffArgs<'a> {
    /// Baseline dataset.
    pub a: &'a PathOrStdin,
    /// Compared dataset.
    pub b: &'a PathOrStdin,
    /// Shared report flags.
    pub report: &'a ReportArgs,
    /// `--summary-only`.
    pub summary_only: bool,
    /// `--exit-code`.
    pub exit_code: bool,
    /// `--max-file-size`.
    pub max_file_size: u64,
}

/// Runs the `diff` command.
///
/// # Errors
///
/// - [`CliError::InvalidArgument`] when both inputs are stdin.
/// - Input and dataset errors for either file (exit 2).
/// - [`CliError::OutputError`] when the report cannot be written.
/// - [`CliError::DiffHasDifferences`] with `--exit-code` when the datasets
///   differ.
pub fn run(args: &DiffArgs<'_>, config: &FormatterConfig) -> Result<(), CliError> {
    if *args.a == PathOrStdin::Stdin && *args.b == PathOrStdin::Stdin {
        return Err(CliError::InvalidArgument {
            detail: "at most one of A and B may be `-`".to_owned(),
        });
    }

    let parse_start = Instant::now();
    let a = load_dataset(args.a, args.max_file_size)?;
    let b = load_dataset(args.b, args.max_file_size)?;
    report_timing("parsed", parse_start.elapsed(), config)?;

    let options = report_options(args.report, config);
    let output = output_label(args.report.output.as_deref());

    let render_start = Instant::now();
    let summary = if args.summary_only {
        let table_a = normalize_input(&a, args.a, &options.normalize)?;
        let table_b = normalize_input(&b, args.b, &options.normalize)?;
        let summary = diff(&table_a, &table_b).summary();
        let mut sink = open_output(args.report.output.as_deref())?;
        write_summary_only(&mut *sink, &summary, options.format)
            .map_err(|e| CliError::output(output.clone(), &e))?;
        Some(summary)
    } else {
        let mut sink = open_output(args.report.output.as_deref())?;
        match write_report(&mut *sink, &a, Some(&b), &options) {
            Ok(outcome) => outcome.summary,
            Err(err) => {
                report_failure(err, (args.a, Some(args.b)), &output)?;
                None
            }
        }
    };
    report_timing("rendered", render_start.elapsed(), config)?;

    let Some(summary) = summary else {
        return Ok(());
    };
    tracing::info!(%summary, "compared datasets");

    if args.report.output.is_some() && !args.summary_only {
        write_summary(&mut std::io::stderr().lock(), &summary, config)
            .map_err(|e| CliError::output("stderr", &e))?;
    }

    if args.exit_code && summary.has_differences() {
        Err(CliError::DiffHasDifferences)
    } else {
        Ok(())
    }
}

fn normalize_input(
    dataset: &Dataset,
    source: &PathOrStdin,
    options: &NormalizeOptions,
) -> Result<LanguageTable, CliError> {
    normalize(dataset, options).map_err(|error| CliError::Dataset {
        source: source.to_string(),
        error,
    })
}

/// Writes the summary alone: a JSON object for the JSON renderer, the
/// one-line counts otherwise.
fn write_summary_only<W: Write + ?Sized>(
    w: &mut W,
    summary: &DiffSummary,
    format: RenderFormat,
) -> std::io::Result<()> {
    match format {
        RenderFormat::Json => {
            let json = serde_json::to_string_pretty(summary).map_err(std::io::Error::other)?;
            writeln!(w, "{json}")?;
        }
        RenderFormat::Html | RenderFormat::Text => writeln!(w, "{summary}")?,
    }
    w.flush()
}
