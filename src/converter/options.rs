//! Encode options and output path derivation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Extension matched when scanning for input files. The match is
/// case-sensitive, so `.MOV` files are not picked up.
pub const SOURCE_EXTENSION: &str = "mov";

/// Extension of converted output files.
pub const TARGET_EXTENSION: &str = "mp4";

/// Encoder selection and container flags passed to FFmpeg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Video encoder selector (`-vcodec`)
    pub video_codec: String,
    /// Audio encoder selector (`-acodec`)
    pub audio_codec: String,
    /// Relocate container metadata to the front of the file so web playback
    /// can start before the download completes (`-movflags faststart`)
    pub faststart: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            video_codec: "libx264".to_string(),
            audio_codec: "aac".to_string(),
            faststart: true,
        }
    }
}

impl EncodeOptions {
    /// Build the full FFmpeg argument list for one conversion, in order:
    /// overwrite flag, input, video codec, audio codec, muxer flags, output.
    pub fn to_args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-y".into(),
            "-i".into(),
            input.into(),
            "-vcodec".into(),
            self.video_codec.as_str().into(),
            "-acodec".into(),
            self.audio_codec.as_str().into(),
        ];
        if self.faststart {
            args.push("-movflags".into());
            args.push("faststart".into());
        }
        args.push(output.into());
        args
    }
}

/// Derive the output path for an input file: same directory, same stem,
/// target extension.
pub fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension(TARGET_EXTENSION)
}
