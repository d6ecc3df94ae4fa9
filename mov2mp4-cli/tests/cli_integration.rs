// mov2mp4-cli/tests/cli_integration.rs
//
// End-to-end tests against the compiled binary. Instead of requiring a real
// ffmpeg install, each test puts a fake `ffmpeg` shell script first on PATH
// that honors the version probe and the conversion call shape.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::tempdir;

fn mov2mp4_cmd() -> Command {
    Command::cargo_bin("mov2mp4").expect("Failed to find mov2mp4 binary")
}

/// Writes an executable fake `ffmpeg` into `dir`.
fn write_fake_ffmpeg(dir: &Path, body: &str) {
    let path = dir.join("ffmpeg");
    fs::write(&path, body).expect("Failed to write fake ffmpeg");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake ffmpeg executable");
}

// The scripts may only use shell builtins: the tests set PATH to the
// fake-tool directory alone, so external utilities are unreachable.

/// Fake ffmpeg that succeeds on everything and creates the output file
/// (the final argument of a conversion call).
const FFMPEG_ALWAYS_OK: &str = r#"#!/bin/sh
[ "$1" = "-version" ] && exit 0
for last; do :; done
: > "$last"
exit 0
"#;

/// Fake ffmpeg that fails any conversion whose arguments mention "broken",
/// with a diagnostic on stderr.
const FFMPEG_FAIL_BROKEN: &str = r#"#!/bin/sh
[ "$1" = "-version" ] && exit 0
case "$*" in
  *broken*) echo "moov atom not found" >&2; exit 1;;
esac
for last; do :; done
: > "$last"
exit 0
"#;

#[test]
fn test_full_success_batch() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?;
    write_fake_ffmpeg(tools.path(), FFMPEG_ALWAYS_OK);

    let root = tempdir()?;
    fs::write(root.path().join("one.mov"), "dummy")?;
    fs::write(root.path().join("two.MOV"), "dummy")?;

    let work = tempdir()?;
    mov2mp4_cmd()
        .env("PATH", tools.path())
        .current_dir(work.path())
        .arg(root.path())
        .assert()
        .success()
        .stdout(contains("2/2 file(s) succeeded"));

    assert!(root.path().join("converted_mp4").join("one.mp4").is_file());
    assert!(root.path().join("converted_mp4").join("two.mp4").is_file());

    // The run log was written next to the working directory default
    let log = fs::read_to_string(work.path().join("conversion.log"))?;
    assert!(log.contains("2/2 file(s) succeeded"));

    Ok(())
}

#[test]
fn test_no_subdirectory_places_outputs_next_to_sources() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?;
    write_fake_ffmpeg(tools.path(), FFMPEG_ALWAYS_OK);

    let root = tempdir()?;
    fs::create_dir(root.path().join("clips"))?;
    fs::write(root.path().join("clips").join("pan.mov"), "dummy")?;

    let work = tempdir()?;
    mov2mp4_cmd()
        .env("PATH", tools.path())
        .current_dir(work.path())
        .arg(root.path())
        .arg("--no-subdirectory")
        .assert()
        .success();

    assert!(root.path().join("clips").join("pan.mp4").is_file());
    assert!(!root.path().join("converted_mp4").exists());

    Ok(())
}

#[test]
fn test_partial_failure_exits_nonzero_with_diagnostic() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?;
    write_fake_ffmpeg(tools.path(), FFMPEG_FAIL_BROKEN);

    let root = tempdir()?;
    fs::write(root.path().join("fine.mov"), "dummy")?;
    fs::write(root.path().join("broken.mov"), "dummy")?;

    let work = tempdir()?;
    mov2mp4_cmd()
        .env("PATH", tools.path())
        .current_dir(work.path())
        .arg(root.path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("moov atom not found"))
        .stdout(contains("1/2 file(s) succeeded"));

    assert!(root.path().join("converted_mp4").join("fine.mp4").is_file());

    // The per-file failure is persisted at error level in the run log
    let log = fs::read_to_string(work.path().join("conversion.log"))?;
    assert!(log.contains("ERROR -"));
    assert!(log.contains("moov atom not found"));

    Ok(())
}

#[test]
fn test_missing_ffmpeg_aborts_before_touching_files() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?; // Empty: no ffmpeg on PATH

    let root = tempdir()?;
    fs::write(root.path().join("one.mov"), "dummy")?;

    let work = tempdir()?;
    mov2mp4_cmd()
        .env("PATH", tools.path())
        .current_dir(work.path())
        .arg(root.path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("ffmpeg"));

    // No output directory was created
    assert!(!root.path().join("converted_mp4").exists());

    Ok(())
}

#[test]
fn test_nonexistent_directory_exits_nonzero() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?;
    write_fake_ffmpeg(tools.path(), FFMPEG_ALWAYS_OK);

    let work = tempdir()?;
    mov2mp4_cmd()
        .env("PATH", tools.path())
        .current_dir(work.path())
        .arg("surely/this/does/not/exist")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("directory not found"));

    Ok(())
}

#[test]
fn test_empty_directory_is_trivial_success() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?;
    write_fake_ffmpeg(tools.path(), FFMPEG_ALWAYS_OK);

    let root = tempdir()?;
    let work = tempdir()?;
    mov2mp4_cmd()
        .env("PATH", tools.path())
        .current_dir(work.path())
        .arg(root.path())
        .assert()
        .success()
        .stdout(contains("Nothing to do"));

    Ok(())
}
