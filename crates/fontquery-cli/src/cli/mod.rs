//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use fontquery_core::RenderFormat;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for PathOrStdin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOrStdin::Stdin => f.write_str("-"),
            PathOrStdin::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Report renderer selected with `--render`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RenderArg {
    /// Standalone XHTML document.
    Html,
    /// Column-aligned terminal text (default).
    Text,
    /// Single pretty-printed JSON document.
    Json,
}

impl From<RenderArg> for RenderFormat {
    fn from(arg: RenderArg) -> Self {
        match arg {
            RenderArg::Html => RenderFormat::Html,
            RenderArg::Text => RenderFormat::Text,
            RenderArg::Json => RenderFormat::Json,
        }
    }
}

/// Output format for `inspect`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    /// Aligned key/value lines (default).
    Human,
    /// Single JSON object.
    Json,
}

/// Options shared by the report-producing subcommands.
#[derive(Args, Clone, Debug)]
pub struct ReportArgs {
    /// Renderer: html, text (default) or json.
    #[arg(long, short = 'R', default_value = "text", value_enum)]
    pub render: RenderArg,

    /// Report title (default: `"{id} {version_id}: {pattern}"` of the first dataset).
    #[arg(long, short = 'T')]
    pub title: Option<String>,

    /// Write the report to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only report this language tag (repeatable).
    #[arg(long = "lang", short = 'l', value_name = "TAG")]
    pub langs: Vec<String>,

    /// Accept aliases beyond sans-serif, serif and monospace.
    #[arg(long)]
    pub extension_aliases: bool,
}

/// All top-level subcommands exposed by the `fontquery` binary.
#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Render the font resolution table of one captured dataset.
    Table {
        /// Path to a dataset JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Compare two captured datasets (A is the baseline).
    Diff {
        /// Path to the baseline dataset, or `-` for stdin.
        #[arg(value_name = "A")]
        a: PathOrStdin,
        /// Path to the compared dataset (cannot be `-` if A is `-`).
        #[arg(value_name = "B")]
        b: PathOrStdin,
        #[command(flatten)]
        report: ReportArgs,
        /// Only print the summary line, no per-language rows.
        #[arg(long)]
        summary_only: bool,
        /// Exit with code 1 when the datasets differ.
        #[arg(long)]
        exit_code: bool,
    },

    /// Print summary statistics for a captured dataset.
    Inspect {
        /// Path to a dataset JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Output format: human (default) or json.
        #[arg(long, short = 'f', default_value = "human", value_enum)]
        format: InspectFormat,
    },
}

/// Root CLI struct for the `fontquery` binary.
///
/// Global flags are marked `global = true` so clap accepts them after any
/// subcommand.
#[derive(Parser, Debug)]
#[command(
    name = "fontquery",
    version,
    about = "Font resolution reports for Linux distributions",
    long_about = "Renders and compares captured fontconfig resolution datasets:\n\
                  which concrete font each language gets for the generic\n\
                  sans-serif, serif and monospace aliases."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase stderr verbosity: timing, then debug and trace logs
    /// (repeatable, incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `FONTQUERY_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "FONTQUERY_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in text reports.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests;
