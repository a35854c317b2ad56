#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["fontquery"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("arguments should parse")
}

// ── help output ──────────────────────────────────────────────────────────────

/// The root help output must contain all top-level subcommand names.
#[test]
fn root_help_lists_all_subcommands() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());
    for name in ["table", "diff", "inspect"] {
        assert!(
            help.contains(name),
            "root help should mention subcommand '{name}'"
        );
    }
}

/// The root help output must describe every global flag.
#[test]
fn root_help_lists_global_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());
    for flag in [
        "--quiet",
        "--verbose",
        "--max-file-size",
        "--no-color",
        "--help",
        "--version",
    ] {
        assert!(
            help.contains(flag),
            "root help should mention flag '{flag}'"
        );
    }
}

/// `fontquery diff --help` must mention the report and diff-only flags.
#[test]
fn diff_help_lists_report_flags() {
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut("diff")
        .expect("diff subcommand should exist");
    let help = format!("{}", sub.render_help());
    for flag in [
        "--render",
        "--title",
        "--output",
        "--lang",
        "--extension-aliases",
        "--summary-only",
        "--exit-code",
    ] {
        assert!(help.contains(flag), "diff help should mention '{flag}'");
    }
}

#[test]
fn clap_definition_is_consistent() {
    Cli::command().debug_assert();
}

// ── argument parsing ─────────────────────────────────────────────────────────

#[test]
fn table_defaults_to_text_on_stdout() {
    let cli = parse(&["table", "fedora.json"]);
    match cli.command {
        Command::Table { file, report } => {
            assert_eq!(file, PathOrStdin::Path(PathBuf::from("fedora.json")));
            assert_eq!(report.render, RenderArg::Text);
            assert!(report.title.is_none());
            assert!(report.output.is_none());
            assert!(report.langs.is_empty());
            assert!(!report.extension_aliases);
        }
        other => panic!("expected table, got {other:?}"),
    }
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
}

#[test]
fn dash_means_stdin() {
    let cli = parse(&["table", "-"]);
    match cli.command {
        Command::Table { file, .. } => assert_eq!(file, PathOrStdin::Stdin),
        other => panic!("expected table, got {other:?}"),
    }
    assert_eq!(PathOrStdin::Stdin.to_string(), "-");
}

#[test]
fn diff_accepts_short_report_flags() {
    let cli = parse(&[
        "diff", "a.json", "b.json", "-R", "html", "-T", "Nightly", "-o", "out.html", "-l", "en",
        "-l", "ja", "--exit-code",
    ]);
    match cli.command {
        Command::Diff {
            a,
            b,
            report,
            summary_only,
            exit_code,
        } => {
            assert_eq!(a.to_string(), "a.json");
            assert_eq!(b.to_string(), "b.json");
            assert_eq!(report.render, RenderArg::Html);
            assert_eq!(report.title.as_deref(), Some("Nightly"));
            assert_eq!(report.output, Some(PathBuf::from("out.html")));
            assert_eq!(report.langs, ["en", "ja"]);
            assert!(!summary_only);
            assert!(exit_code);
        }
        other => panic!("expected diff, got {other:?}"),
    }
}

#[test]
fn verbose_is_counted() {
    let cli = parse(&["-vvv", "inspect", "x.json"]);
    assert_eq!(cli.verbose, 3);
    let cli = parse(&["inspect", "x.json", "-v", "--format", "json"]);
    assert_eq!(cli.verbose, 1);
    match cli.command {
        Command::Inspect { format, .. } => assert_eq!(format, InspectFormat::Json),
        other => panic!("expected inspect, got {other:?}"),
    }
}

#[test]
fn quiet_conflicts_with_verbose() {
    let result = Cli::try_parse_from(["fontquery", "-q", "-v", "table", "x.json"]);
    assert!(result.is_err(), "-q and -v must conflict");
}

#[test]
fn unknown_renderer_is_rejected() {
    let result = Cli::try_parse_from(["fontquery", "table", "x.json", "--render", "pdf"]);
    assert!(result.is_err());
}

#[test]
fn max_file_size_flag_overrides_default() {
    let cli = parse(&["--max-file-size", "1024", "table", "x.json"]);
    assert_eq!(cli.max_file_size, 1024);
}

#[test]
fn render_arg_maps_onto_core_formats() {
    assert_eq!(RenderFormat::from(RenderArg::Html), RenderFormat::Html);
    assert_eq!(RenderFormat::from(RenderArg::Text), RenderFormat::Text);
    assert_eq!(RenderFormat::from(RenderArg::Json), RenderFormat::Json);
}
