/// Terminal presentation: color detection, status lines and verbose timing.
///
/// Reports themselves are rendered by `fontquery-core`; this module decides
/// how they are styled and writes the few lines the CLI adds on stderr.
/// Colors are disabled when `--no-color` is set, the `NO_COLOR` environment
/// variable is present (per <https://no-color.org>), the report goes to a
/// file, or stdout is not a TTY.
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use fontquery_core::{DiffSummary, Palette};

use crate::error::CliError;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted in a report written
/// to stdout.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Presentation settings derived from the global CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled for stdout.
    pub colors: bool,
    /// Suppress all non-error stderr output.
    pub quiet: bool,
    /// Emit timing to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }

    /// Palette for a text report; files are always plain.
    pub fn palette(&self, to_file: bool) -> Palette {
        Palette::from_colors(self.colors && !to_file)
    }
}

// ---------------------------------------------------------------------------
// stderr lines
// ---------------------------------------------------------------------------

/// Writes `"{label} in {ms}ms"` to `writer` in verbose mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing<W: Write + ?Sized>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose || config.quiet {
        return Ok(());
    }
    writeln!(writer, "{label} in {}ms", duration.as_millis())
}

/// Writes the one-line comparison summary unless quiet.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write + ?Sized>(
    writer: &mut W,
    summary: &DiffSummary,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    writeln!(writer, "{summary}")
}

/// [`write_timing`] on locked stderr.
///
/// # Errors
///
/// Returns [`CliError::OutputError`] if stderr cannot be written.
pub fn report_timing(
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    write_timing(&mut std::io::stderr().lock(), label, duration, config)
        .map_err(|e| CliError::output("stderr", &e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
