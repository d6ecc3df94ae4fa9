// mov2mp4-cli/src/logging.rs
//
// Run logging for the CLI. Every message goes to an append-only log file
// with a timestamp and level prefix, and is mirrored to the console without
// the prefix. The logger is an explicit value created once in main and
// passed where needed, rather than process-global state; RUST_LOG-driven
// diagnostics from the core go through env_logger separately.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Returns the current local timestamp formatted for log lines.
fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Appending file logger with mirrored console output.
pub struct RunLogger {
    file: BufWriter<File>,
}

impl RunLogger {
    /// Opens (or creates) the log file in append mode.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: BufWriter::new(file),
        })
    }

    /// Logs an informational message to the file and stdout.
    pub fn info(&mut self, msg: &str) {
        self.write_line("INFO", msg);
        println!("{msg}");
    }

    /// Logs an error message to the file and stderr.
    pub fn error(&mut self, msg: &str) {
        self.write_line("ERROR", msg);
        eprintln!("{msg}");
    }

    fn write_line(&mut self, level: &str, msg: &str) {
        writeln!(self.file, "{} - {} - {}", timestamp(), level, msg).ok();
        // Flush per line so the log survives an interrupted run
        self.file.flush().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn log_file_is_appended_across_logger_instances() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("conversion.log");

        {
            let mut logger = RunLogger::open(&log_path).unwrap();
            logger.info("first run");
        }
        {
            let mut logger = RunLogger::open(&log_path).unwrap();
            logger.error("second run");
        }

        let contents = std::fs::read_to_string(&log_path).unwrap();
        assert!(contents.contains("INFO - first run"));
        assert!(contents.contains("ERROR - second run"));
        assert_eq!(contents.lines().count(), 2);
    }
}
