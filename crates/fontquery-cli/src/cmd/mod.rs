/// Command modules for the `fontquery` CLI.
///
/// Each submodule implements one subcommand. The shared helpers below load
/// datasets and translate report options and errors between clap and the
/// core.
pub mod diff;
pub mod inspect;
pub mod table;

use std::collections::BTreeSet;
use std::io::ErrorKind;

use fontquery_core::{
    AliasPolicy, Dataset, DatasetRole, NormalizeOptions, RenderFormat, ReportError,
    ReportOptions, parse_dataset,
};

use crate::error::CliError;
use crate::format::FormatterConfig;
use crate::io::read_input;
use crate::{PathOrStdin, ReportArgs};

/// Reads and parses one dataset, labelling failures with its source.
///
/// # Errors
///
/// Returns the I/O error from [`read_input`] or [`CliError::Dataset`].
pub fn load_dataset(source: &PathOrStdin, max_size: u64) -> Result<Dataset, CliError> {
    let content = read_input(source, max_size)?;
    parse_dataset(&content).map_err(|error| CliError::Dataset {
        source: source.to_string(),
        error,
    })
}

/// Normalization settings selected by `--lang` and `--extension-aliases`.
pub fn normalize_options(args: &ReportArgs) -> NormalizeOptions {
    NormalizeOptions {
        alias_policy: if args.extension_aliases {
            AliasPolicy::Open
        } else {
            AliasPolicy::Standard
        },
        languages: if args.langs.is_empty() {
            None
        } else {
            Some(args.langs.iter().cloned().collect::<BTreeSet<_>>())
        },
    }
}

/// Core report options for the parsed flags.
pub fn report_options(args: &ReportArgs, config: &FormatterConfig) -> ReportOptions {
    let format = RenderFormat::from(args.render);
    ReportOptions {
        format,
        title: args.title.clone(),
        palette: config.palette(args.output.is_some()),
        normalize: normalize_options(args),
    }
}

/// Maps a core report failure onto the CLI error for the dataset or sink
/// involved.
///
/// A closed pipe on stdout (e.g. `fontquery table x.json | head`) is not an
/// error.
pub fn report_failure(
    err: ReportError,
    inputs: (&PathOrStdin, Option<&PathOrStdin>),
    output: &str,
) -> Result<(), CliError> {
    match err {
        ReportError::Dataset { role, source } => {
            let path = match (role, inputs.1) {
                (DatasetRole::B, Some(b)) => b,
                (DatasetRole::Input | DatasetRole::A | DatasetRole::B, None | Some(_)) => inputs.0,
            };
            Err(CliError::Dataset {
                source: path.to_string(),
                error: source,
            })
        }
        ReportError::Io(e) if e.kind() == ErrorKind::BrokenPipe && output == "stdout" => {
            tracing::debug!("stdout closed before the report was complete");
            Ok(())
        }
        ReportError::Io(e) => Err(CliError::output(output, &e)),
    }
}
