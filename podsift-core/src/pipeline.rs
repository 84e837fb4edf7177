//! Sequential segmentation pipeline.
//!
//! ## Stages (each consumes the full output of the previous one)
//!
//! ```text
//! 1. RMS extraction      — one energy per 20 ms window
//! 2. Feature aggregation — mean / variance / MLER per one-second frame
//! 3. Classification      — MLER ≤ threshold → music
//! 4. Smoothing           — ±3 majority filter over the labels
//! 5. Merging             — runs → merged segments → grown boundaries
//! ```
//!
//! Single-threaded by design: the computation is bounded and proportional
//! to input length, and the intermediate buffers are scratch storage sized
//! from derived counts and dropped when the run returns.

use tracing::{debug, info};

use crate::{
    analysis::{classify::classify, energy::extract_rms, features::aggregate, smooth::smooth},
    config::PipelineConfig,
    error::{PodsiftError, Result},
    segment::{detect_runs, grow_boundaries, merge_runs, Segment},
    source::SampleSource,
};

/// The pipeline entry point. Construction validates the configuration;
/// a `Segmenter` can then run any number of sources.
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: PipelineConfig,
}

impl Segmenter {
    /// Create a segmenter from a validated configuration.
    ///
    /// # Errors
    /// `PodsiftError::Configuration` if the configuration is rejected.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Classify `source` into an ordered list of music/speech segments in
    /// long-frame units.
    ///
    /// # Errors
    /// - `PodsiftError::Configuration` if the source metadata cannot support
    ///   the configured windows (zero sample rate, window under one sample).
    /// - `PodsiftError::InsufficientData` if the stream is shorter than one
    ///   aggregation window. No partial result is produced on failure.
    pub fn segment(&self, source: &mut dyn SampleSource) -> Result<Vec<Segment>> {
        let cfg = &self.config;
        let sample_rate = source.sample_rate();
        if sample_rate == 0 {
            return Err(PodsiftError::Configuration(
                "source reports a zero sample rate".to_string(),
            ));
        }
        let frames_per_rms_window = cfg.frames_per_rms_window(sample_rate);
        if frames_per_rms_window == 0 {
            return Err(PodsiftError::Configuration(format!(
                "rms window of {} ms is shorter than one sample at {} Hz",
                cfg.rms_window_ms, sample_rate
            )));
        }

        let total_frames = source.total_frames();
        let rms_window_count = (total_frames / frames_per_rms_window as u64) as usize;
        let windows_per_long_frame = cfg.rms_windows_per_long_frame();
        let long_frame_count = rms_window_count / windows_per_long_frame;
        if long_frame_count == 0 {
            return Err(PodsiftError::InsufficientData {
                frames: total_frames,
                sample_rate,
            });
        }

        debug!(
            sample_rate,
            total_frames,
            frames_per_rms_window,
            rms_window_count,
            long_frame_count,
            "derived pipeline dimensions"
        );

        let rms = extract_rms(
            source,
            frames_per_rms_window,
            cfg.rms_window_ms,
            rms_window_count,
        );
        let features = aggregate(
            &rms[..long_frame_count * windows_per_long_frame],
            windows_per_long_frame,
            cfg.low_energy_coefficient,
        );
        let mut labels = classify(&features, cfg.music_threshold);
        smooth(&mut labels, cfg.lead_in_is_music, cfg.tail_is_music);

        let runs = detect_runs(&labels);
        let mut segments = merge_runs(
            &runs,
            cfg.min_segment_long_frames as usize,
            cfg.has_intro,
        );
        grow_boundaries(
            &mut segments,
            cfg.grow_before_long_frames as usize,
            cfg.grow_after_long_frames as usize,
            cfg.has_intro,
            long_frame_count,
        );

        info!(
            long_frames = long_frame_count,
            runs = runs.len(),
            segments = segments.len(),
            music = segments.iter().filter(|s| s.is_music).count(),
            "segmentation complete"
        );
        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BufferSource;

    /// 16 kHz test stream builder: seconds of alternating-sign constant
    /// amplitude ("music": every window at the mean, MLER 0) or pulsed
    /// amplitude ("speech": half the windows near-silent, high MLER).
    fn seconds(music: bool, count: usize) -> Vec<f32> {
        let mut out = Vec::with_capacity(count * 16_000);
        for _ in 0..count {
            for i in 0..16_000 {
                let s = if music || (i / 320) % 2 == 0 { 0.4 } else { 0.001 };
                out.push(if i % 2 == 0 { s } else { -s });
            }
        }
        out
    }

    #[test]
    fn insufficient_data_is_an_explicit_error() {
        let samples = vec![0.1f32; 8_000]; // half a second
        let mut source = BufferSource::new(&samples, 16_000);
        let segmenter = Segmenter::new(PipelineConfig::default()).unwrap();
        assert!(matches!(
            segmenter.segment(&mut source),
            Err(PodsiftError::InsufficientData { .. })
        ));
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let cfg = PipelineConfig {
            min_segment_long_frames: 0,
            ..Default::default()
        };
        assert!(matches!(
            Segmenter::new(cfg),
            Err(PodsiftError::Configuration(_))
        ));
    }

    #[test]
    fn pure_silence_produces_a_defined_segment_list() {
        let samples = vec![0.0f32; 16_000 * 20];
        let mut source = BufferSource::new(&samples, 16_000);
        let segmenter = Segmenter::new(PipelineConfig::default()).unwrap();
        let segments = segmenter.segment(&mut source).expect("silence must not fail");
        assert!(!segments.is_empty());
        // Silent blocks get MLER 0 and classify as music to be cut.
        assert!(segments[0].is_music);
    }

    #[test]
    fn music_then_speech_splits_into_two_segments() {
        let mut samples = seconds(true, 20);
        samples.extend(seconds(false, 20));
        let mut source = BufferSource::new(&samples, 16_000);
        let segmenter = Segmenter::new(PipelineConfig::default()).unwrap();
        let segments = segmenter.segment(&mut source).unwrap();

        assert_eq!(segments.len(), 2);
        assert!(segments[0].is_music);
        assert!(!segments[1].is_music);
        // Music contracts at the boundary, speech expands over it.
        assert!(segments[1].start <= segments[0].end + 1);
        assert_eq!(segments[1].end, 39);
    }

    #[test]
    fn zero_sample_rate_source_rejected() {
        let samples = vec![0.1f32; 16_000];
        let mut source = BufferSource::new(&samples, 0);
        let segmenter = Segmenter::new(PipelineConfig::default()).unwrap();
        assert!(matches!(
            segmenter.segment(&mut source),
            Err(PodsiftError::Configuration(_))
        ));
    }
}
