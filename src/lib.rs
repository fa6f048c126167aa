// src/lib.rs

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod remote;
pub mod report;
pub mod types;
pub mod watch;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use tracing::info;

use crate::cli::{CliArgs, Command, TaskArgs};
use crate::config::{discover_configs, load_and_validate};
use crate::engine::{poll_forever, run_once, UnglueTask};
use crate::fs::{FileSystem, RealFileSystem};
use crate::remote::{CompileClient, HttpCompileClient};
use crate::report::{ConsoleReporter, Reporter};
use crate::watch::DiscoveryOptions;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config discovery and loading
/// - one `UnglueTask` per config, sharing the HTTP client and reporter
/// - either a single forced pass (`compile`) or the polling loop (`watch`)
pub fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Command::Compile(opts) => {
            let mut tasks = build_tasks(&opts)?;
            let reports = run_once(&mut tasks, true);
            let failed = reports.iter().filter(|r| r.has_failures()).count();
            info!(configs = tasks.len(), failed, "compile finished");
            Ok(())
        }
        Command::Watch(opts) => {
            let mut tasks = build_tasks(&opts)?;
            poll_forever(&mut tasks, Duration::from_millis(opts.interval_ms))
        }
    }
}

/// Load every config `opts.path` refers to and prepare a task for it.
///
/// Configs that enable neither `css` nor `js` are reported and left out.
pub fn build_tasks(opts: &TaskArgs) -> Result<Vec<UnglueTask>> {
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let client: Arc<dyn CompileClient> =
        Arc::new(HttpCompileClient::new(Duration::from_secs(opts.timeout_secs))?);
    let reporter: Arc<dyn Reporter> = Arc::new(ConsoleReporter);
    let discovery = DiscoveryOptions {
        follow_symlinks: opts.symlinks,
    };

    let root = Path::new(&opts.path);
    let config_paths = discover_configs(fs.as_ref(), root, discovery)?;
    if config_paths.is_empty() {
        bail!("no .unglue config found in {}", root.display());
    }

    let mut tasks = Vec::with_capacity(config_paths.len());
    for path in config_paths {
        let config = load_and_validate(fs.as_ref(), &path)?;
        let mut task = UnglueTask::new(
            config,
            opts.server.clone(),
            Arc::clone(&fs),
            Arc::clone(&client),
            Arc::clone(&reporter),
        )
        .with_discovery(discovery);

        if task.prepare()? {
            reporter.info(&format!("watching {}", path.display()));
            tasks.push(task);
        } else {
            reporter.info(&format!(
                "{} has neither a css nor a js section, skipping",
                path.display()
            ));
        }
    }

    Ok(tasks)
}
