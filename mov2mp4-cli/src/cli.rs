// mov2mp4-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mov2mp4: Batch MOV to MP4 conversion tool",
    long_about = "Recursively finds MOV files under a directory and converts them \
                  to MP4 using ffmpeg. When invoked without arguments, prompts for \
                  the directory and output placement interactively."
)]
pub struct Cli {
    /// Directory to search for MOV files. Prompts interactively when omitted.
    #[arg(value_name = "ROOT_DIR")]
    pub root_dir: Option<PathBuf>,

    /// Write converted files next to their sources instead of into
    /// ROOT_DIR/converted_mp4
    #[arg(long)]
    pub no_subdirectory: bool,

    /// Path of the append-only run log
    #[arg(long, value_name = "LOG_FILE", default_value = "conversion.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_args() {
        let cli = Cli::parse_from(["mov2mp4", "videos_dir"]);
        assert_eq!(cli.root_dir, Some(PathBuf::from("videos_dir")));
        assert!(!cli.no_subdirectory); // Subdirectory placement is the default
        assert_eq!(cli.log_file, PathBuf::from("conversion.log"));
    }

    #[test]
    fn test_parse_no_subdirectory_flag() {
        let cli = Cli::parse_from(["mov2mp4", "videos_dir", "--no-subdirectory"]);
        assert_eq!(cli.root_dir, Some(PathBuf::from("videos_dir")));
        assert!(cli.no_subdirectory);
    }

    #[test]
    fn test_parse_no_args_enables_interactive_mode() {
        let cli = Cli::parse_from(["mov2mp4"]);
        assert!(cli.root_dir.is_none());
    }

    #[test]
    fn test_parse_custom_log_file() {
        let cli = Cli::parse_from(["mov2mp4", "videos_dir", "--log-file", "runs/today.log"]);
        assert_eq!(cli.log_file, PathBuf::from("runs/today.log"));
    }
}
