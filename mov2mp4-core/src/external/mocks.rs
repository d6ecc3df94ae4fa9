// mov2mp4-core/src/external/mocks.rs
//
// --- Mocking Infrastructure (for testing) ---
//
// This module is only compiled when the "test-mocks" feature is enabled;
// the crate's own dev-dependencies turn it on so `cargo test` gets it
// without extra flags, while release builds leave it out.
//
// A scriptable CommandExecutor used by the integration tests. By default
// every invocation succeeds with empty output and creates the output file
// named by the final argument of a conversion call, so the batch loop can
// be exercised without a real transcoding tool.
#![cfg(feature = "test-mocks")]

use super::CommandExecutor;

use std::cell::RefCell;
use std::ffi::OsString;
use std::io;
#[cfg(unix)]
use std::os::unix::process::ExitStatusExt;
#[cfg(windows)]
use std::os::windows::process::ExitStatusExt;
use std::process::{ExitStatus, Output};

/// Builds an ExitStatus for the given exit code on either platform family.
fn exit_status(code: i32) -> ExitStatus {
    #[cfg(unix)]
    {
        // Unix wait status: exit code lives in the high byte
        ExitStatus::from_raw(code << 8)
    }
    #[cfg(windows)]
    {
        ExitStatus::from_raw(code as u32)
    }
}

/// Per-pattern scripted failure.
struct FailureRule {
    /// Substring matched against any argument of the call
    arg_pattern: String,
    /// Bytes returned on the error stream
    stderr: Vec<u8>,
}

/// Mock implementation of CommandExecutor supporting scripted failures.
#[derive(Default)]
pub struct MockCommandExecutor {
    failure_rules: RefCell<Vec<FailureRule>>,
    refuse_launch: RefCell<bool>,
    fail_version_probe: RefCell<bool>,
    received_calls: RefCell<Vec<Vec<String>>>,
}

impl MockCommandExecutor {
    pub fn new() -> Self {
        Default::default()
    }

    /// Any call containing `arg_pattern` in one of its arguments exits
    /// non-zero with `stderr` on its error stream.
    pub fn fail_for(&self, arg_pattern: &str, stderr: &str) {
        self.failure_rules.borrow_mut().push(FailureRule {
            arg_pattern: arg_pattern.to_string(),
            stderr: stderr.as_bytes().to_vec(),
        });
    }

    /// Every execute call fails to launch with `ErrorKind::NotFound`,
    /// simulating a missing tool.
    pub fn refuse_launch(&self) {
        *self.refuse_launch.borrow_mut() = true;
    }

    /// The `-version` probe exits non-zero while other calls succeed.
    pub fn fail_version_probe(&self) {
        *self.fail_version_probe.borrow_mut() = true;
    }

    /// All argument lists received so far, in call order.
    pub fn received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls.borrow().clone()
    }

    /// Number of conversion invocations (calls carrying an `-i` argument).
    pub fn conversion_call_count(&self) -> usize {
        self.received_calls
            .borrow()
            .iter()
            .filter(|args| args.iter().any(|a| a == "-i"))
            .count()
    }

    fn output(exit_code: i32, stderr: Vec<u8>) -> Output {
        Output {
            status: exit_status(exit_code),
            stdout: Vec::new(),
            stderr,
        }
    }
}

impl CommandExecutor for MockCommandExecutor {
    fn execute(&self, _program: &str, args: &[OsString]) -> io::Result<Output> {
        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        self.received_calls.borrow_mut().push(args.clone());

        if *self.refuse_launch.borrow() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "entity not found"));
        }

        let is_version_probe = args.iter().any(|a| a == "-version");
        if is_version_probe {
            return if *self.fail_version_probe.borrow() {
                Ok(Self::output(1, Vec::new()))
            } else {
                Ok(Self::output(0, Vec::new()))
            };
        }

        let failing = self
            .failure_rules
            .borrow()
            .iter()
            .position(|rule| args.iter().any(|a| a.contains(&rule.arg_pattern)));
        if let Some(index) = failing {
            let stderr = self.failure_rules.borrow()[index].stderr.clone();
            return Ok(Self::output(1, stderr));
        }

        // Successful conversion: create the output file named by the last
        // argument, matching what a real tool run would leave behind.
        if args.iter().any(|a| a == "-i") {
            if let Some(output_path) = args.last() {
                if let Some(parent) = std::path::Path::new(output_path).parent() {
                    std::fs::create_dir_all(parent).ok();
                }
                std::fs::File::create(output_path).ok();
            }
        }

        Ok(Self::output(0, Vec::new()))
    }
}
