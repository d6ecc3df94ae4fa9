//! Core library for batch video conversion using an external ffmpeg binary.
//!
//! This crate provides source file discovery, output path resolution,
//! per-file ffmpeg invocation with outcome classification, and the
//! sequential batch loop that ties them together.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mov2mp4_core::{process_batch, BatchConfig, LogLevel, SystemCommandExecutor};
//! use std::path::PathBuf;
//!
//! let config = BatchConfig::new(PathBuf::from("/path/to/videos"));
//! let executor = SystemCommandExecutor;
//! let mut log = |level: LogLevel, msg: &str| match level {
//!     LogLevel::Info => println!("{msg}"),
//!     LogLevel::Error => eprintln!("{msg}"),
//! };
//!
//! let result = process_batch(&executor, &config, &mut log).unwrap();
//! println!("{}/{} succeeded", result.succeeded, result.total);
//! ```
//!
//! ## Known limitations
//!
//! * No subprocess timeout: a hung ffmpeg blocks the batch indefinitely.
//! * Symbolic links are not followed during discovery, so files only
//!   reachable through a link are skipped (this also makes traversal safe
//!   against link cycles).

pub mod batch;
pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod outpath;

// Re-exports for public API
pub use batch::{
    process_batch, BatchResult, ConversionOutcome, ConversionTask, LogLevel, TaskReport,
};
pub use config::{BatchConfig, EncodingSettings};
pub use discovery::find_convertible_files;
pub use error::{CoreError, CoreResult};
pub use external::{check_tool_availability, CommandExecutor, SystemCommandExecutor};
pub use outpath::{converted_dir_name, resolve_output_path};
