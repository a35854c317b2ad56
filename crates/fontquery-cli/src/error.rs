/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `fontquery` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: the tool could not read, parse or write. These errors
///   terminate before a report is complete.
/// - Exit code **1**: the tool ran to completion but the comparison found
///   differences and `--exit-code` was requested.
use std::fmt;
use std::path::PathBuf;

use fontquery_core::DatasetError;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `fontquery` CLI can produce.
///
/// [`CliError::message`] returns the human-readable string printed to stderr
/// before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input and output failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// An I/O error while reading a file not covered by the variants above.
    IoError {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// Writing the report (or a status line) failed.
    OutputError {
        /// `"stdout"`, `"stderr"`, or the output path.
        target: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// Arguments are individually valid but cannot be combined.
    InvalidArgument {
        /// What is wrong with the invocation.
        detail: String,
    },

    /// A dataset could not be parsed or normalized.
    Dataset {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The core error.
        error: DatasetError,
    },

    // --- Exit code 1: logical result ---
    /// The compared datasets differ and `--exit-code` was given.
    ///
    /// The report has already been written; this variant exists so `main`
    /// can exit with 1 without printing anything else.
    DiffHasDifferences,
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::OutputError { .. }
            | Self::InvalidArgument { .. }
            | Self::Dataset { .. } => 2,

            Self::DiffHasDifferences => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::OutputError { target, detail } => {
                format!("error: failed to write {target}: {detail}")
            }
            Self::InvalidArgument { detail } => format!("error: {detail}"),
            Self::Dataset { source, error } => format!("error: {source}: {error}"),
            Self::DiffHasDifferences => "error: datasets differ".to_owned(),
        }
    }

    /// Wraps an output failure on `target`.
    pub fn output(target: impl Into<String>, err: &std::io::Error) -> Self {
        Self::OutputError {
            target: target.into(),
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
