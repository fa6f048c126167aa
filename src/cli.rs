// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Default compile service.
pub const DEFAULT_SERVER: &str = "https://v1.unglue.io";

/// Command-line arguments for `unglue`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "unglue",
    version,
    about = "Compile SCSS and JS through a remote unglue server whenever sources change.",
    long_about = None
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `UNGLUE_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compile once, then keep polling the sources and recompile on change.
    Watch(TaskArgs),
    /// Compile every configured section once and exit.
    Compile(TaskArgs),
}

/// Options shared by `watch` and `compile`.
#[derive(Debug, Clone, Args)]
pub struct TaskArgs {
    /// A `.unglue` config file, or a folder searched recursively for them.
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: String,

    /// Base URL of the compile server.
    #[arg(long, value_name = "URL", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Milliseconds to wait between two polls (watch only).
    #[arg(long, value_name = "MS", default_value_t = 500)]
    pub interval_ms: u64,

    /// Timeout for a single compile request, in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Follow symlinked folders while collecting source files.
    #[arg(long)]
    pub symlinks: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
