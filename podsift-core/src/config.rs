//! Pipeline configuration.
//!
//! All tunables the original algorithm kept as process-wide constants live
//! here as an immutable value handed to [`Segmenter::new`](crate::Segmenter::new).

use crate::error::{PodsiftError, Result};

/// Configuration for the segmentation pipeline.
///
/// Validated once by [`validate`](Self::validate) before any audio is read;
/// the pipeline never mutates it.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Duration of one RMS window in milliseconds. Default: 20.
    pub rms_window_ms: u32,
    /// Duration of one aggregation (long) frame in milliseconds. Default: 1000.
    pub aggregation_window_ms: u32,
    /// Scale factor applied to the block mean to form the low-energy
    /// threshold used by the MLER feature. Default: 0.20.
    pub low_energy_coefficient: f32,
    /// MLER at or below this value classifies a long frame as music.
    /// Default: 0.0 — only frames where no RMS window dipped below the
    /// scaled mean count as music.
    pub music_threshold: f32,
    /// Minimum merged segment length in long frames. Shorter runs are
    /// absorbed into the preceding segment. Default: 10.
    pub min_segment_long_frames: u32,
    /// Long frames of crossfade room added before a speech segment
    /// (removed from the start of a music segment). Default: 3.
    pub grow_before_long_frames: u32,
    /// Long frames of crossfade room added after a speech segment
    /// (removed from the end of a music segment). Default: 3.
    pub grow_after_long_frames: u32,
    /// The recording opens with a non-speech lead-in; the first merged
    /// segment is forced to non-music regardless of its computed label.
    /// Default: false.
    pub has_intro: bool,
    /// Forced label for the first three smoothed windows. Default: true
    /// (recordings typically open with music or an intro jingle).
    pub lead_in_is_music: bool,
    /// Forced label for the last three smoothed windows. Default: false
    /// (recordings typically close with pure speech).
    pub tail_is_music: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            rms_window_ms: 20,
            aggregation_window_ms: 1000,
            low_energy_coefficient: 0.20,
            music_threshold: 0.0,
            min_segment_long_frames: 10,
            grow_before_long_frames: 3,
            grow_after_long_frames: 3,
            has_intro: false,
            lead_in_is_music: true,
            tail_is_music: false,
        }
    }
}

impl PipelineConfig {
    /// Check the configuration before running the pipeline.
    ///
    /// # Errors
    /// Returns `PodsiftError::Configuration` for non-positive window
    /// durations, an aggregation window shorter than the RMS window, zero
    /// margins or minimum segment length, or combined margins that exceed
    /// the minimum segment length.
    pub fn validate(&self) -> Result<()> {
        if self.rms_window_ms == 0 {
            return Err(config_err("rms_window_ms must be positive"));
        }
        if self.aggregation_window_ms == 0 {
            return Err(config_err("aggregation_window_ms must be positive"));
        }
        if self.aggregation_window_ms < self.rms_window_ms {
            return Err(config_err(
                "aggregation_window_ms must be at least rms_window_ms",
            ));
        }
        if !(self.low_energy_coefficient > 0.0) {
            return Err(config_err("low_energy_coefficient must be positive"));
        }
        if self.music_threshold < 0.0 {
            return Err(config_err("music_threshold must be non-negative"));
        }
        if self.min_segment_long_frames == 0 {
            return Err(config_err("min_segment_long_frames must be positive"));
        }
        if self.grow_before_long_frames == 0 || self.grow_after_long_frames == 0 {
            return Err(config_err("boundary growth margins must be positive"));
        }
        if self.grow_before_long_frames + self.grow_after_long_frames
            > self.min_segment_long_frames
        {
            return Err(config_err(
                "combined growth margins exceed min_segment_long_frames",
            ));
        }
        Ok(())
    }

    /// RMS windows per aggregation frame (floored ratio of durations).
    pub fn rms_windows_per_long_frame(&self) -> usize {
        (self.aggregation_window_ms / self.rms_window_ms) as usize
    }

    /// Sample frames per RMS window at the given sample rate.
    pub fn frames_per_rms_window(&self, sample_rate: u32) -> usize {
        (sample_rate as u64 * self.rms_window_ms as u64 / 1000) as usize
    }
}

fn config_err(msg: &str) -> PodsiftError {
    PodsiftError::Configuration(msg.to_string())
}
