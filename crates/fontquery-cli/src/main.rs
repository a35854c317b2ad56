mod cli;
mod cmd;
mod error;
mod format;
mod io;
mod logging;

pub use cli::{Cli, Command, InspectFormat, PathOrStdin, RenderArg, ReportArgs};

use clap::Parser;

use crate::cmd::diff::DiffArgs;
use crate::error::CliError;
use crate::format::FormatterConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    let code = match run(&cli) {
        Ok(()) => 0,
        Err(e @ CliError::DiffHasDifferences) => e.exit_code(),
        Err(e) => {
            eprintln!("{}", e.message());
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = FormatterConfig::from_flags(cli.no_color, cli.quiet, cli.verbose > 0);
    tracing::debug!(version = fontquery_core::version(), ?config, "starting");

    match &cli.command {
        Command::Table { file, report } => {
            cmd::table::run(file, report, cli.max_file_size, &config)
        }
        Command::Diff {
            a,
            b,
            report,
            summary_only,
            exit_code,
        } => cmd::diff::run(
            &DiffArgs {
                a,
                b,
                report,
                summary_only: *summary_only,
                exit_code: *exit_code,
                max_file_size: cli.max_file_size,
            },
            &config,
        ),
        Command::Inspect { file, format } => cmd::inspect::run(file, *format, cli.max_file_size),
    }
}
