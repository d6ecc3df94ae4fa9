// mov2mp4-cli/src/interactive.rs
//
// Interactive fallback mode: when the binary is started without arguments,
// the root directory and the output placement choice are collected through
// text prompts. The directory is validated to exist before the run starts.

use dialoguer::{Confirm, Input};
use std::io;
use std::path::{Path, PathBuf};

/// Options collected from the interactive prompts.
#[derive(Debug)]
pub struct RunOptions {
    pub root_dir: PathBuf,
    pub use_subdirectory: bool,
}

/// Strips one matching pair of surrounding quotes, as left behind by
/// drag-and-drop into some terminals.
fn strip_quotes(input: &str) -> &str {
    let trimmed = input.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}

/// Prompts for the root directory and the subdirectory choice.
pub fn prompt_run_options() -> io::Result<RunOptions> {
    println!("============================================================");
    println!("mov2mp4 - Interactive Mode");
    println!("============================================================");

    let raw: String = Input::new()
        .with_prompt("Directory containing MOV files")
        .validate_with(|input: &String| -> Result<(), String> {
            let path = Path::new(strip_quotes(input));
            if !path.exists() {
                Err(format!("directory not found: {}", path.display()))
            } else if !path.is_dir() {
                Err(format!("path is not a directory: {}", path.display()))
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let root_dir = PathBuf::from(strip_quotes(&raw));

    let use_subdirectory = Confirm::new()
        .with_prompt("Place converted files in a 'converted_mp4' subdirectory?")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    Ok(RunOptions {
        root_dir,
        use_subdirectory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quotes_removes_matching_pairs() {
        assert_eq!(strip_quotes("\"/videos/trip\""), "/videos/trip");
        assert_eq!(strip_quotes("'/videos/trip'"), "/videos/trip");
        assert_eq!(strip_quotes("  /videos/trip  "), "/videos/trip");
    }

    #[test]
    fn strip_quotes_leaves_unmatched_quotes_alone() {
        assert_eq!(strip_quotes("\"/videos/trip"), "\"/videos/trip");
        assert_eq!(strip_quotes("'"), "'");
    }
}
