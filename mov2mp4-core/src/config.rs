// mov2mp4-core/src/config.rs
//
// Configuration structures and default constants for a conversion batch.
// Instances of BatchConfig are created by consumers of the library (like
// mov2mp4-cli) and passed to process_batch to control conversion behavior.

use std::path::PathBuf;

/// Default video codec passed to ffmpeg via `-c:v`.
pub const DEFAULT_VIDEO_CODEC: &str = "libx264";

/// Default audio codec passed to ffmpeg via `-c:a`.
pub const DEFAULT_AUDIO_CODEC: &str = "aac";

/// Default encoding speed/quality tradeoff preset passed via `-preset`.
pub const DEFAULT_PRESET: &str = "medium";

/// Default CRF quality value passed via `-crf`.
/// Range 18-28 is sensible for H.264; lower is higher quality.
pub const DEFAULT_QUALITY: u8 = 23;

/// Default extension of the output container.
pub const DEFAULT_TARGET_EXTENSION: &str = "mp4";

/// Name of the external transcoding tool resolved from PATH.
pub const DEFAULT_TOOL: &str = "ffmpeg";

/// Encoding parameters forwarded to the external tool on every invocation.
///
/// These map one-to-one onto ffmpeg flags and are fixed for the whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingSettings {
    /// Output video codec identifier (`-c:v`)
    pub video_codec: String,
    /// Output audio codec identifier (`-c:a`)
    pub audio_codec: String,
    /// Encoding speed/quality tradeoff preset (`-preset`)
    pub preset: String,
    /// CRF quality level (`-crf`), lower is higher quality
    pub quality: u8,
}

impl Default for EncodingSettings {
    fn default() -> Self {
        Self {
            video_codec: DEFAULT_VIDEO_CODEC.to_string(),
            audio_codec: DEFAULT_AUDIO_CODEC.to_string(),
            preset: DEFAULT_PRESET.to_string(),
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Main configuration structure for one conversion batch.
///
/// # Examples
///
/// ```rust,no_run
/// use mov2mp4_core::BatchConfig;
/// use std::path::PathBuf;
///
/// let mut config = BatchConfig::new(PathBuf::from("/path/to/videos"));
/// config.use_subdirectory = false;
/// ```
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Root directory searched recursively for source files
    pub root_dir: PathBuf,

    /// When true, outputs go to `<root>/converted_<ext>`; when false, each
    /// output is written next to its source file
    pub use_subdirectory: bool,

    /// Recognized source extensions. The set is matched exactly, so both
    /// casings must be listed for case-sensitive filesystems.
    pub source_extensions: Vec<String>,

    /// Extension of the output container (without the leading dot)
    pub target_extension: String,

    /// Program name of the external transcoding tool. Resolved from PATH;
    /// overridable so tests can point at a fake binary.
    pub tool: String,

    /// Encoding parameters applied to every file in the batch
    pub encoding: EncodingSettings,
}

impl BatchConfig {
    /// Creates a configuration with the default MOV -> MP4 settings for the
    /// given root directory.
    pub fn new(root_dir: PathBuf) -> Self {
        Self {
            root_dir,
            use_subdirectory: true,
            source_extensions: vec!["mov".to_string(), "MOV".to_string()],
            target_extension: DEFAULT_TARGET_EXTENSION.to_string(),
            tool: DEFAULT_TOOL.to_string(),
            encoding: EncodingSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_mov_to_mp4_contract() {
        let config = BatchConfig::new(PathBuf::from("/videos"));
        assert!(config.use_subdirectory);
        assert_eq!(config.source_extensions, vec!["mov", "MOV"]);
        assert_eq!(config.target_extension, "mp4");
        assert_eq!(config.tool, "ffmpeg");
        assert_eq!(config.encoding.video_codec, "libx264");
        assert_eq!(config.encoding.audio_codec, "aac");
        assert_eq!(config.encoding.preset, "medium");
        assert_eq!(config.encoding.quality, 23);
    }
}
