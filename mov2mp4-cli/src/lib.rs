// mov2mp4-cli/src/lib.rs
//
// Library portion of the mov2mp4 CLI application.
// Contains argument definitions, interactive prompts, and run logging.

pub mod cli;
pub mod interactive;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::Cli;
pub use interactive::{prompt_run_options, RunOptions};
pub use logging::RunLogger;
