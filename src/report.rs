// src/report.rs

//! User-facing status lines.
//!
//! The engine never prints directly; it reports through a [`Reporter`] so
//! tests can record events instead of scraping stdout.

use chrono::Local;
use colored::Colorize;

/// Sink for the three kinds of status line unglue emits.
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
    fn success(&self, message: &str);
}

/// Prints `[HH:MM:SS] message` lines to stdout.
///
/// Errors are prefixed with `Error:` and shown in red, successes in green.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    fn timestamp() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("[{}] {}", Self::timestamp(), message);
    }

    fn error(&self, message: &str) {
        println!("[{}] Error: {}", Self::timestamp(), message.red());
    }

    fn success(&self, message: &str) {
        println!("[{}] {}", Self::timestamp(), message.green());
    }
}
