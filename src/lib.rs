//! Batch conversion of QuickTime `.mov` files to web-friendly `.mp4`.
//!
//! The actual transcoding is delegated to an external FFmpeg binary; this
//! crate locates the binary, builds the command line, and reports outcomes.

pub mod converter;
