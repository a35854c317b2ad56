//! `tracing` subscriber setup.
//!
//! Events go to stderr so they never mix with a report on stdout. `RUST_LOG`
//! wins when set; otherwise the level follows `-q` / `-v`.
use tracing_subscriber::EnvFilter;

/// Default filter directive for the verbosity flags.
pub fn default_directive(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global stderr subscriber. A second call is a no-op.
pub fn init(quiet: bool, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
