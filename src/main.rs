//! mov2mp4 - batch MOV to MP4 conversion via FFmpeg.
//!
//! Main entry point for the command-line tool.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use mov2mp4::converter::{batch, report, EncodeOptions, Ffmpeg};

#[derive(Parser)]
#[command(name = "mov2mp4")]
#[command(author, version, about = "Convert .mov videos to web-friendly .mp4 via FFmpeg")]
struct Cli {
    /// Video encoder passed to FFmpeg
    #[arg(long, global = true, default_value = "libx264")]
    vcodec: String,

    /// Audio encoder passed to FFmpeg
    #[arg(long, global = true, default_value = "aac")]
    acodec: String,

    /// Do not relocate container metadata for progressive web playback
    #[arg(long, global = true)]
    no_faststart: bool,

    /// Path to the ffmpeg binary (skips discovery)
    #[arg(long, global = true, value_name = "PATH")]
    ffmpeg: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single .mov file
    Convert {
        /// Input .mov file
        input: PathBuf,

        /// Output path (defaults to the input with a .mp4 extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert every .mov file in a directory (non-recursive)
    Batch {
        /// Directory to scan for .mov files
        directory: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let options = EncodeOptions {
        video_codec: cli.vcodec,
        audio_codec: cli.acodec,
        faststart: !cli.no_faststart,
    };

    let ffmpeg = match cli.ffmpeg {
        Some(path) => Ffmpeg::with_binary(path, options),
        None => Ffmpeg::new(options)?,
    };
    log::debug!("using ffmpeg at {}", ffmpeg.binary().display());

    match cli.command {
        Commands::Convert { input, output } => {
            match report(&input, ffmpeg.convert(&input, output.as_deref())) {
                Some(_) => Ok(ExitCode::SUCCESS),
                None => Ok(ExitCode::FAILURE),
            }
        }
        Commands::Batch { directory } => {
            batch(&ffmpeg, &directory)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
