/// Input acquisition and output sinks.
///
/// This module is the only place the `fontquery` binary touches the
/// filesystem or the standard streams for report data; `fontquery-core`
/// never does.
///
/// - Disk files: size checked via `std::fs::metadata` before any read.
/// - Stdin: read through a `Read::take` cap one byte past the limit, so the
///   allocation is bounded and overflow is still detected.
/// - UTF-8 validation reports the byte offset of the first bad sequence.
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read as _, Write};
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Reads the entire contents of `source` into a `String`.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) when the file is missing, unreadable,
/// larger than `max_size`, or not valid UTF-8, or when stdin fails.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    let content = match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(max_size),
    }?;
    tracing::debug!(source = %source, bytes = content.len(), "read input");
    Ok(content)
}

fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| io_error_to_cli(&e, path))?
        .len();

    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))?;
    bytes_to_string(bytes, &path.display().to_string())
}

fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let mut buf: Vec<u8> = Vec::new();
    std::io::stdin()
        .lock()
        .take(max_size.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 > max_size {
        return Err(CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: max_size,
            actual: None,
        });
    }

    bytes_to_string(buf, "-")
}

fn bytes_to_string(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Opens the report sink: a buffered, truncated file for `Some(path)`, or
/// locked stdout.
///
/// # Errors
///
/// Returns [`CliError::OutputError`] when the file cannot be created.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, CliError> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| CliError::output(output_label(Some(path)), &e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}

/// Name of the report sink used in error messages.
pub fn output_label(path: Option<&Path>) -> String {
    path.map_or_else(|| "stdout".to_owned(), |p| p.display().to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
