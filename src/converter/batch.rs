//! Directory scan and the sequential batch loop.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::ffmpeg::{ConvertError, Ffmpeg};
use super::options::SOURCE_EXTENSION;

/// List the `.mov` files directly under `dir` (non-recursive).
///
/// The extension match is case-sensitive, so `.MOV` files are skipped.
/// Order is whatever the directory listing yields; no sort is applied.
pub fn scan_mov_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            files.push(path);
        }
    }
    Ok(files)
}

/// Print the per-file outcome line and hand back the output path on success.
///
/// Failures are reduced to a report plus `None`; they never propagate.
pub fn report(input: &Path, result: Result<PathBuf, ConvertError>) -> Option<PathBuf> {
    match result {
        Ok(output) => {
            println!("Converted: {} -> {}", input.display(), output.display());
            Some(output)
        }
        Err(err) => {
            eprintln!("Error converting {}: {}", input.display(), err);
            None
        }
    }
}

/// Convert every `.mov` file in `dir`, one at a time.
///
/// Each file gets exactly one conversion attempt with the default output
/// path; a failed file is reported and the loop moves on. Only a failure to
/// read the directory itself is returned as an error.
pub fn batch(ffmpeg: &Ffmpeg, dir: &Path) -> Result<(), ConvertError> {
    let inputs =
        scan_mov_files(dir).map_err(|e| ConvertError::ReadDir(dir.to_path_buf(), e))?;

    if inputs.is_empty() {
        log::warn!("no .{} files found in {}", SOURCE_EXTENSION, dir.display());
        return Ok(());
    }
    log::info!(
        "converting {} .{} file(s) in {}",
        inputs.len(),
        SOURCE_EXTENSION,
        dir.display()
    );

    for input in &inputs {
        report(input, ffmpeg.convert(input, None));
    }

    Ok(())
}
