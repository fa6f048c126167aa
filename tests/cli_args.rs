use clap::Parser;

use unglue::cli::{CliArgs, Command, DEFAULT_SERVER};
use unglue::logging::build_filter;

#[test]
fn watch_defaults_to_current_folder_and_public_server() {
    let args = CliArgs::try_parse_from(["unglue", "watch"]).unwrap();

    match args.command {
        Command::Watch(opts) => {
            assert_eq!(opts.path, ".");
            assert_eq!(opts.server, DEFAULT_SERVER);
            assert_eq!(opts.interval_ms, 500);
            assert!(!opts.symlinks);
        }
        other => panic!("expected watch, got {other:?}"),
    }
}

#[test]
fn compile_accepts_path_and_overrides() {
    let args = CliArgs::try_parse_from([
        "unglue",
        "compile",
        "site/layout.unglue",
        "--server",
        "http://localhost:3000",
        "--timeout-secs",
        "5",
        "--symlinks",
        "--log-level",
        "debug",
    ])
    .unwrap();

    assert!(args.log_level.is_some());
    match args.command {
        Command::Compile(opts) => {
            assert_eq!(opts.path, "site/layout.unglue");
            assert_eq!(opts.server, "http://localhost:3000");
            assert_eq!(opts.timeout_secs, 5);
            assert!(opts.symlinks);
        }
        other => panic!("expected compile, got {other:?}"),
    }
}

#[test]
fn log_filters_accept_levels_and_directives() {
    assert!(build_filter("debug").is_ok());
    assert!(build_filter("unglue=trace,reqwest=debug").is_ok());
    assert!(build_filter("unglue=loud").is_err());
}
