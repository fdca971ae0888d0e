//! FFmpeg wrapper for single-file conversion.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use super::options::{derive_output_path, EncodeOptions};

/// Longest stderr excerpt carried in a conversion error. FFmpeg prints its
/// full banner and stream maps before the actual failure.
const MAX_STDERR_LEN: usize = 2000;

/// Errors that can occur while converting a file.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("ffmpeg binary not found; install FFmpeg or pass an explicit path")]
    NotFound,
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),
    #[error("failed to spawn ffmpeg: {0}")]
    SpawnFailed(#[from] std::io::Error),
    #[error("ffmpeg exited with an error: {0}")]
    ConversionFailed(String),
    #[error("failed to read directory {0}: {1}")]
    ReadDir(PathBuf, #[source] std::io::Error),
}

/// Wrapper around an FFmpeg binary with a fixed set of encode options.
pub struct Ffmpeg {
    ffmpeg_path: PathBuf,
    options: EncodeOptions,
}

impl Ffmpeg {
    /// Create a wrapper, searching for the FFmpeg binary.
    pub fn new(options: EncodeOptions) -> Result<Self, ConvertError> {
        let ffmpeg_path = find_ffmpeg()?;
        Ok(Self {
            ffmpeg_path,
            options,
        })
    }

    /// Create a wrapper around an explicit binary path, skipping discovery.
    pub fn with_binary(ffmpeg_path: PathBuf, options: EncodeOptions) -> Self {
        Self {
            ffmpeg_path,
            options,
        }
    }

    /// Path of the binary this wrapper invokes.
    pub fn binary(&self) -> &Path {
        &self.ffmpeg_path
    }

    /// Convert a single file, blocking until FFmpeg exits.
    ///
    /// If `output` is not given it is derived from `input` with the extension
    /// replaced. The input must exist; nothing is spawned otherwise. Returns
    /// the output path on exit code zero, and an error carrying FFmpeg's
    /// stderr on a nonzero exit.
    pub fn convert(
        &self,
        input: &Path,
        output: Option<&Path>,
    ) -> Result<PathBuf, ConvertError> {
        if !input.exists() {
            return Err(ConvertError::MissingInput(input.to_path_buf()));
        }

        let output = match output {
            Some(path) => path.to_path_buf(),
            None => derive_output_path(input),
        };

        log::debug!(
            "converting {} -> {}",
            input.display(),
            output.display()
        );

        let result = Command::new(&self.ffmpeg_path)
            .args(self.options.to_args(input, &output))
            .output()?;

        if !result.status.success() {
            let mut stderr = String::from_utf8_lossy(&result.stderr).into_owned();
            if stderr.len() > MAX_STDERR_LEN {
                // Keep the tail; FFmpeg reports the actual failure last.
                let cut = stderr.len() - MAX_STDERR_LEN;
                let cut = stderr
                    .char_indices()
                    .map(|(i, _)| i)
                    .find(|&i| i >= cut)
                    .unwrap_or(0);
                stderr = format!("...{}", &stderr[cut..]);
            }
            return Err(ConvertError::ConversionFailed(stderr.trim().to_string()));
        }

        Ok(output)
    }
}

/// Find the FFmpeg binary on the system PATH or in common install locations.
fn find_ffmpeg() -> Result<PathBuf, ConvertError> {
    if let Ok(path) = which::which("ffmpeg") {
        return Ok(path);
    }

    let common_paths = if cfg!(target_os = "macos") {
        vec![
            "/usr/local/bin/ffmpeg",
            "/opt/homebrew/bin/ffmpeg",
            "/opt/local/bin/ffmpeg",
        ]
    } else if cfg!(target_os = "windows") {
        vec![
            "C:\\ffmpeg\\bin\\ffmpeg.exe",
            "C:\\Program Files\\ffmpeg\\bin\\ffmpeg.exe",
        ]
    } else {
        vec!["/usr/bin/ffmpeg", "/usr/local/bin/ffmpeg"]
    };

    for path_str in common_paths {
        let path = PathBuf::from(path_str);
        if path.exists() {
            return Ok(path);
        }
    }

    Err(ConvertError::NotFound)
}
