//! Windowed RMS energy extraction.
//!
//! One energy value per fixed-duration window (default 20 ms). The divisor
//! in the energy formula is the window duration in *milliseconds*, not the
//! sample count — not a textbook RMS, but the scaling every downstream
//! threshold in this pipeline was tuned against. Changing it would shift
//! the MLER feature and the music threshold together.

use crate::source::SampleSource;

/// Extract `window_count` energies from `source`.
///
/// Reads `frames_per_window` samples per window; a short final window uses
/// whatever was actually read, and an empty one yields 0. Purely functional
/// over the stream apart from advancing its cursor.
pub fn extract_rms(
    source: &mut dyn SampleSource,
    frames_per_window: usize,
    window_ms: u32,
    window_count: usize,
) -> Vec<f32> {
    let mut read_buf = vec![0f32; frames_per_window];
    let mut energies = Vec::with_capacity(window_count);

    for _ in 0..window_count {
        let frames_read = source.read(&mut read_buf);
        let sum_sq: f64 = read_buf[..frames_read]
            .iter()
            .map(|&s| (s as f64) * (s as f64))
            .sum();
        energies.push((sum_sq / window_ms as f64).sqrt() as f32);
    }

    energies
}
