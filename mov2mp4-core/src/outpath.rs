//! Output path resolution for conversion tasks.
//!
//! Handles the logic for deriving each destination path from a discovered
//! source file, a target extension, and the output-placement policy.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Prefix of the dedicated output subdirectory created under the root.
const CONVERTED_DIR_PREFIX: &str = "converted_";

/// Returns the name of the dedicated output subdirectory for a target
/// extension, e.g. `converted_mp4`.
pub fn converted_dir_name(target_extension: &str) -> String {
    format!("{CONVERTED_DIR_PREFIX}{target_extension}")
}

/// Derives the destination path for one source file.
///
/// With `use_subdirectory` set, the destination is
/// `<root>/converted_<ext>/<stem>.<ext>`; otherwise it is
/// `<source parent>/<stem>.<ext>`. The source extension is replaced, never
/// appended. Two source files sharing a stem resolve to the same output
/// path; the later conversion overwrites the earlier one.
///
/// Directory creation is the caller's responsibility (see
/// [`crate::batch::process_batch`]), which creates each unique destination
/// directory once per run.
pub fn resolve_output_path(
    source: &Path,
    root_dir: &Path,
    target_extension: &str,
    use_subdirectory: bool,
) -> CoreResult<PathBuf> {
    let stem = source.file_stem().ok_or_else(|| {
        CoreError::PathError(format!(
            "could not determine file stem for '{}'",
            source.display()
        ))
    })?;

    let dest_dir = if use_subdirectory {
        root_dir.join(converted_dir_name(target_extension))
    } else {
        source
            .parent()
            .map(Path::to_path_buf)
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| {
                CoreError::PathError(format!(
                    "could not determine parent directory for '{}'",
                    source.display()
                ))
            })?
    };

    let mut filename = stem.to_os_string();
    filename.push(".");
    filename.push(target_extension);

    Ok(dest_dir.join(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subdirectory_policy_places_output_under_root() {
        let out = resolve_output_path(
            Path::new("/videos/clips/holiday.mov"),
            Path::new("/videos"),
            "mp4",
            true,
        )
        .unwrap();
        assert_eq!(out, PathBuf::from("/videos/converted_mp4/holiday.mp4"));
    }

    #[test]
    fn sibling_policy_places_output_next_to_source() {
        let out = resolve_output_path(
            Path::new("/videos/clips/holiday.mov"),
            Path::new("/videos"),
            "mp4",
            false,
        )
        .unwrap();
        assert_eq!(out, PathBuf::from("/videos/clips/holiday.mp4"));
    }

    #[test]
    fn extension_is_replaced_not_appended() {
        let out = resolve_output_path(
            Path::new("/videos/trip.MOV"),
            Path::new("/videos"),
            "mp4",
            true,
        )
        .unwrap();
        assert_eq!(out.file_name().unwrap(), "trip.mp4");
    }

    #[test]
    fn stem_with_inner_dots_keeps_everything_before_final_extension() {
        let out = resolve_output_path(
            Path::new("/videos/take.2.final.mov"),
            Path::new("/videos"),
            "mp4",
            false,
        )
        .unwrap();
        assert_eq!(out, PathBuf::from("/videos/take.2.final.mp4"));
    }

    #[test]
    fn colliding_stems_resolve_to_the_same_destination() {
        let a = resolve_output_path(
            Path::new("/videos/a/clip.mov"),
            Path::new("/videos"),
            "mp4",
            true,
        )
        .unwrap();
        let b = resolve_output_path(
            Path::new("/videos/b/clip.MOV"),
            Path::new("/videos"),
            "mp4",
            true,
        )
        .unwrap();
        // Documented overwrite behavior: the second conversion wins.
        assert_eq!(a, b);
    }

    #[test]
    fn converted_dir_name_includes_extension() {
        assert_eq!(converted_dir_name("mp4"), "converted_mp4");
        assert_eq!(converted_dir_name("webm"), "converted_webm");
    }
}
