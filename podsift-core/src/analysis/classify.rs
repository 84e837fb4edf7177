//! MLER threshold classifier.
//!
//! Music carries sustained energy, so almost none of its RMS windows dip
//! below the scaled mean; speech alternates between voiced bursts and
//! pauses, so many do. A long frame whose MLER is at or below the
//! threshold is labelled music.

use super::features::LongFrame;

/// One music/speech label per long frame. Pure function, no state.
pub fn classify(frames: &[LongFrame], music_threshold: f32) -> Vec<bool> {
    frames
        .iter()
        .map(|frame| frame.mler <= music_threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(mler: f32) -> LongFrame {
        LongFrame {
            mean_rms: 1.0,
            variance_rms: 0.0,
            normalized_variance_rms: 0.0,
            mler,
        }
    }

    #[test]
    fn zero_mler_is_music_at_default_threshold() {
        let labels = classify(&[frame(0.0), frame(0.1), frame(0.0)], 0.0);
        assert_eq!(labels, vec![true, false, true]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let labels = classify(&[frame(0.3), frame(0.31)], 0.3);
        assert_eq!(labels, vec![true, false]);
    }
}
