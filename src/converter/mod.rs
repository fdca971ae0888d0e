//! MOV to MP4 Converter Module
//!
//! Converts QuickTime .mov files to H.264/AAC .mp4 using FFmpeg.

mod batch;
mod ffmpeg;
mod options;

pub use batch::{batch, report, scan_mov_files};
pub use ffmpeg::{ConvertError, Ffmpeg};
pub use options::{derive_output_path, EncodeOptions, SOURCE_EXTENSION, TARGET_EXTENSION};
