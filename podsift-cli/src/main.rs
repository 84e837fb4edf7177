//! podsift — classify a WAV file into music/speech segments.
//!
//! Decoding, argument handling and output encoding live here; the
//! classification itself is `podsift-core`. Multi-channel input is
//! downmixed to mono before analysis.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use hound::SampleFormat;
use tracing::info;

use podsift_core::{BufferSource, PipelineConfig, Segmenter};

#[derive(Parser)]
#[command(name = "podsift")]
#[command(about = "Detect music and speech segments in a WAV recording", long_about = None)]
struct Cli {
    /// Input WAV file
    input: PathBuf,

    /// Emit the segment list as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// The recording opens with a non-speech lead-in; force the first
    /// segment to be treated as non-speech
    #[arg(long)]
    intro: bool,

    /// Minimum segment length in seconds
    #[arg(long, default_value_t = 10)]
    min_segment: u32,

    /// MLER at or below this value classifies a second as music
    #[arg(long, default_value_t = 0.0)]
    music_threshold: f32,

    /// Scale factor on the mean energy for the low-energy threshold
    #[arg(long, default_value_t = 0.20)]
    low_energy_coefficient: f32,

    /// Crossfade margin before speech segments, in seconds
    #[arg(long, default_value_t = 3)]
    grow_before: u32,

    /// Crossfade margin after speech segments, in seconds
    #[arg(long, default_value_t = 3)]
    grow_after: u32,

    /// Log per-second features to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "podsift=debug"
    } else {
        "podsift=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.parse().unwrap()),
        )
        .init();

    let (samples, sample_rate) = read_wav_mono(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    info!(
        path = %cli.input.display(),
        sample_rate,
        frames = samples.len(),
        "decoded input"
    );

    let config = PipelineConfig {
        low_energy_coefficient: cli.low_energy_coefficient,
        music_threshold: cli.music_threshold,
        min_segment_long_frames: cli.min_segment,
        grow_before_long_frames: cli.grow_before,
        grow_after_long_frames: cli.grow_after,
        has_intro: cli.intro,
        ..Default::default()
    };
    let segmenter = Segmenter::new(config)?;

    let mut source = BufferSource::new(&samples, sample_rate);
    let segments = segmenter.segment(&mut source)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        let window_ms = segmenter.config().aggregation_window_ms;
        println!("{:>8}  {:>8}  kind", "start_s", "end_s");
        for seg in &segments {
            println!(
                "{:>8}  {:>8}  {}",
                seg.start_ms(window_ms) / 1000,
                seg.end_ms(window_ms) / 1000,
                if seg.is_music { "music" } else { "speech" }
            );
        }
    }

    Ok(())
}

/// Decode a WAV file to mono f32, averaging channels when needed.
fn read_wav_mono(path: &Path) -> Result<(Vec<f32>, u32)> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels as usize;
    if channels == 0 {
        bail!("WAV reports zero channels");
    }

    let interleaved: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Float, 32) => reader.samples::<f32>().collect::<hound::Result<_>>()?,
        (SampleFormat::Int, bits) if bits <= 32 => {
            let scale = (1i64 << (bits - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<hound::Result<_>>()?
        }
        (format, bits) => bail!("unsupported WAV format: {bits}-bit {format:?}"),
    };

    if channels == 1 {
        return Ok((interleaved, spec.sample_rate));
    }
    let mono = interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect();
    Ok((mono, spec.sample_rate))
}
