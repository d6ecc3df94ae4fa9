// mov2mp4-cli/src/main.rs
//
// Entry point for the mov2mp4 batch conversion tool.
//
// Responsibilities include:
// - Parsing command-line arguments (or prompting interactively when absent).
// - Setting up the run logger (append-only file + mirrored console output).
// - Invoking the core batch logic (`mov2mp4_core::process_batch`).
// - Managing process exit codes: 0 only when every conversion succeeded.

use clap::Parser;
use console::style;
use mov2mp4_cli::{prompt_run_options, Cli, RunLogger};
use mov2mp4_core::{process_batch, BatchConfig, LogLevel, SystemCommandExecutor};
use std::path::PathBuf;
use std::process;

/// Runs one batch. Returns whether every conversion succeeded; fatal
/// precondition failures propagate as errors.
fn run(args: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    // Resolve the run options from arguments, or interactively when the
    // root directory was not given on the command line.
    let (root_dir, use_subdirectory): (PathBuf, bool) = match args.root_dir {
        Some(dir) => (dir, !args.no_subdirectory),
        None => {
            let options = prompt_run_options()?;
            (options.root_dir, options.use_subdirectory)
        }
    };

    let mut logger = RunLogger::open(&args.log_file)?;
    let mut config = BatchConfig::new(root_dir);
    config.use_subdirectory = use_subdirectory;

    logger.info("========================================");
    logger.info(&format!(
        "mov2mp4 run started: root directory {}",
        config.root_dir.display()
    ));
    logger.info(&format!(
        "Output placement: {}",
        if config.use_subdirectory {
            "dedicated 'converted_mp4' subdirectory"
        } else {
            "next to each source file"
        }
    ));

    let executor = SystemCommandExecutor;
    // Per-file failures arrive at Error level and go to stderr + ERROR log
    // lines; everything else is mirrored as INFO.
    let mut on_progress = |level: LogLevel, msg: &str| match level {
        LogLevel::Info => logger.info(msg),
        LogLevel::Error => logger.error(msg),
    };
    let result = match process_batch(&executor, &config, &mut on_progress) {
        Ok(result) => result,
        Err(e) => {
            logger.error(&format!("FATAL: {e}"));
            return Err(e.into());
        }
    };

    if result.all_succeeded() {
        logger.info("All files converted successfully.");
        Ok(true)
    } else {
        logger.error(&format!(
            "{} of {} file(s) failed to convert. Check {} for details.",
            result.total - result.succeeded,
            result.total,
            args.log_file.display()
        ));
        Ok(false)
    }
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    match run(args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            process::exit(1);
        }
    }
}
