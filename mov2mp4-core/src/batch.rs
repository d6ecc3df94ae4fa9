// mov2mp4-core/src/batch.rs
//
// The batch orchestrator: sequences the tool availability check, file
// discovery, per-file invocation, and aggregation into a BatchResult.
// Execution is strictly sequential; one file's failure never aborts the
// batch, while precondition failures (missing tool, missing directory)
// abort before any file is touched.

use crate::config::BatchConfig;
use crate::discovery::find_convertible_files;
use crate::error::CoreResult;
use crate::external::ffmpeg::convert_file;
use crate::external::{check_tool_availability, CommandExecutor};
use crate::outpath::resolve_output_path;

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// Severity of one progress line emitted by the batch loop.
///
/// Consumers route `Error` lines to their error stream (and error log
/// level) and `Info` lines to normal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

/// One unit of work: a discovered source file paired with its derived
/// destination path. Created once per source file and consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionTask {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Classified result of one conversion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Success,
    /// The invocation failed; `diagnostic` carries the tool's error stream
    /// content, or the launch error text if the process never started.
    Failure { diagnostic: String },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Success)
    }
}

/// A task together with its outcome, in conversion order.
#[derive(Debug, Clone)]
pub struct TaskReport {
    pub task: ConversionTask,
    pub outcome: ConversionOutcome,
}

/// Aggregate result of one batch run.
///
/// An empty discovery set yields `total == succeeded == 0`, which counts as
/// full success.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub total: usize,
    pub succeeded: usize,
    pub reports: Vec<TaskReport>,
}

impl BatchResult {
    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }

    /// Reports of the tasks that failed, in conversion order.
    pub fn failed(&self) -> impl Iterator<Item = &TaskReport> {
        self.reports.iter().filter(|r| !r.outcome.is_success())
    }
}

/// Runs one end-to-end conversion batch.
///
/// Control flow: availability check -> discovery -> sequential conversion
/// -> aggregation. The `log_callback` receives every human-readable
/// progress line tagged with its [`LogLevel`]; per-file failures are
/// reported at `Error` level, everything else at `Info`. The CLI mirrors
/// these to the console and a log file.
///
/// # Errors
///
/// Returns an error only for fatal preconditions: the tool being
/// unavailable, or the root directory missing/not a directory. Individual
/// conversion failures are recorded in the returned [`BatchResult`].
pub fn process_batch<S, F>(
    executor: &S,
    config: &BatchConfig,
    log_callback: &mut F,
) -> CoreResult<BatchResult>
where
    S: CommandExecutor,
    F: FnMut(LogLevel, &str),
{
    // Fail fast: every later step is useless without the tool.
    check_tool_availability(executor, &config.tool)?;
    log_callback(
        LogLevel::Info,
        &format!("External tool '{}' found.", config.tool),
    );

    let files = find_convertible_files(&config.root_dir, &config.source_extensions)?;
    log_callback(
        LogLevel::Info,
        &format!(
            "Found {} source file(s) under {}",
            files.len(),
            config.root_dir.display()
        ),
    );

    if files.is_empty() {
        log_callback(LogLevel::Info, "No convertible files found. Nothing to do.");
        return Ok(BatchResult::default());
    }

    let mut tasks = Vec::with_capacity(files.len());
    let mut created_dirs: HashSet<PathBuf> = HashSet::new();
    for source in files {
        let destination = resolve_output_path(
            &source,
            &config.root_dir,
            &config.target_extension,
            config.use_subdirectory,
        )?;
        // Create each unique destination directory once per run. Creation
        // is idempotent; a pre-existing directory is not an error.
        if let Some(dir) = destination.parent() {
            if created_dirs.insert(dir.to_path_buf()) {
                fs::create_dir_all(dir)?;
            }
        }
        tasks.push(ConversionTask {
            source,
            destination,
        });
    }

    let total = tasks.len();
    log_callback(
        LogLevel::Info,
        &format!("Starting conversion of {total} file(s)..."),
    );

    let mut result = BatchResult {
        total,
        succeeded: 0,
        reports: Vec::with_capacity(total),
    };

    for (index, task) in tasks.into_iter().enumerate() {
        let name = task.source.file_name().unwrap_or(task.source.as_os_str());
        log_callback(
            LogLevel::Info,
            &format!(
                "[{}/{}] Converting: {}",
                index + 1,
                total,
                name.to_string_lossy()
            ),
        );

        let outcome = convert_file(executor, &config.tool, &task, &config.encoding);
        match &outcome {
            ConversionOutcome::Success => {
                result.succeeded += 1;
                log_callback(
                    LogLevel::Info,
                    &format!(
                        "[{}/{}] Done: {} -> {}",
                        index + 1,
                        total,
                        name.to_string_lossy(),
                        task.destination.display()
                    ),
                );
            }
            ConversionOutcome::Failure { diagnostic } => {
                log_callback(
                    LogLevel::Error,
                    &format!(
                        "[{}/{}] FAILED: {}: {}",
                        index + 1,
                        total,
                        name.to_string_lossy(),
                        diagnostic.trim_end()
                    ),
                );
            }
        }
        result.reports.push(TaskReport { task, outcome });
    }

    log_callback(
        LogLevel::Info,
        &format!(
            "Conversion finished: {}/{} file(s) succeeded.",
            result.succeeded, result.total
        ),
    );
    Ok(result)
}
