// src/engine/driver.rs

//! Loops that drive [`UnglueTask`]s.

use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use super::{IterationReport, UnglueTask};

/// Iterate every task once.
pub fn run_once(tasks: &mut [UnglueTask], force: bool) -> Vec<IterationReport> {
    tasks.iter_mut().map(|task| task.iterate(force)).collect()
}

/// Compile everything once, then poll the tasks every `interval` forever.
///
/// Per-iteration failures are already reported by the tasks; the loop keeps
/// going regardless.
pub fn poll_forever(tasks: &mut [UnglueTask], interval: Duration) -> ! {
    info!(tasks = tasks.len(), ?interval, "watching for changes");
    run_once(tasks, true);

    loop {
        thread::sleep(interval);
        let reports = run_once(tasks, false);
        let dispatched = reports.iter().filter(|r| r.dispatched()).count();
        if dispatched > 0 {
            debug!(dispatched, "poll finished");
        }
    }
}
