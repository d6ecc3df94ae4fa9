// mov2mp4-core/src/external/ffmpeg.rs
//
// Builds the fixed ffmpeg invocation for one conversion task and classifies
// its outcome. The invocation template mirrors the command-line contract:
//
//   ffmpeg -i <input> -c:v <vcodec> -c:a <acodec> -preset <preset>
//          -crf <quality> -y <output>
//
// No timeout is enforced; a hung ffmpeg process blocks the batch. This is a
// documented limitation of the sequential design.

use crate::batch::{ConversionOutcome, ConversionTask};
use crate::config::EncodingSettings;
use crate::external::CommandExecutor;

use std::ffi::OsString;
use std::path::Path;

/// Builds the argument list for converting `input` into `output`.
pub fn build_conversion_args(
    input: &Path,
    output: &Path,
    settings: &EncodingSettings,
) -> Vec<OsString> {
    vec![
        OsString::from("-i"),
        input.as_os_str().to_os_string(),
        OsString::from("-c:v"),
        OsString::from(&settings.video_codec),
        OsString::from("-c:a"),
        OsString::from(&settings.audio_codec),
        OsString::from("-preset"),
        OsString::from(&settings.preset),
        OsString::from("-crf"),
        OsString::from(settings.quality.to_string()),
        // Overwrite a pre-existing output without prompting
        OsString::from("-y"),
        output.as_os_str().to_os_string(),
    ]
}

/// Runs one conversion and classifies the result.
///
/// Each task is attempted exactly once. The outcome is an explicit value
/// rather than an error so a single failure never unwinds the batch:
///
/// * Launch failure (tool vanished since the availability check) ->
///   `Failure` with the launch error text
/// * Non-zero exit -> `Failure` with the captured stderr content
/// * Exit 0 -> `Success`
pub fn convert_file<S: CommandExecutor>(
    executor: &S,
    tool: &str,
    task: &ConversionTask,
    settings: &EncodingSettings,
) -> ConversionOutcome {
    let args = build_conversion_args(&task.source, &task.destination, settings);
    log::debug!(
        "Invoking {} for {} -> {}",
        tool,
        task.source.display(),
        task.destination.display()
    );

    match executor.execute(tool, &args) {
        Ok(output) if output.status.success() => ConversionOutcome::Success,
        Ok(output) => ConversionOutcome::Failure {
            diagnostic: String::from_utf8_lossy(&output.stderr).into_owned(),
        },
        Err(e) => ConversionOutcome::Failure {
            diagnostic: format!("failed to launch '{tool}': {e}"),
        },
    }
}
