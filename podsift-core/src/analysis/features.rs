//! Per-second feature aggregation.
//!
//! Partitions the RMS sequence into contiguous equal-size blocks (one per
//! aggregation window) and computes four features per block:
//!
//! - mean energy
//! - variance of the energies (deviation from the block mean)
//! - normalized variance (variance / mean)
//! - Modified Low Energy Ratio (MLER): the fraction of RMS windows whose
//!   energy falls below `low_energy_coefficient × mean`. A window exactly
//!   at the threshold contributes a half step.

use tracing::debug;

/// Aggregate features for one long (one-second) frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongFrame {
    pub mean_rms: f32,
    pub variance_rms: f32,
    pub normalized_variance_rms: f32,
    pub mler: f32,
}

/// Sign in {-1, 0, +1}. `f32::signum` maps 0.0 to 1.0, which would turn
/// exactly-threshold energies into full low-energy hits instead of the
/// half step the MLER formula expects.
fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Compute per-block features over `rms`, `block_size` windows per block.
///
/// Only complete blocks are aggregated; trailing RMS windows beyond the
/// last full block are dropped. A silent block (zero mean) takes defined
/// fallbacks — zero variance and zero MLER — so no NaN or Inf escapes the
/// divide-by-mean math. Zero MLER classifies the block as music downstream,
/// which cuts silence together with music.
pub fn aggregate(rms: &[f32], block_size: usize, low_energy_coefficient: f32) -> Vec<LongFrame> {
    let block_count = rms.len() / block_size;
    let mut frames = Vec::with_capacity(block_count);

    for (index, block) in rms.chunks_exact(block_size).enumerate() {
        let mean = block.iter().sum::<f32>() / block_size as f32;

        let frame = if mean == 0.0 {
            LongFrame {
                mean_rms: 0.0,
                variance_rms: 0.0,
                normalized_variance_rms: 0.0,
                mler: 0.0,
            }
        } else {
            let low_threshold = low_energy_coefficient * mean;
            let mut deviation_sum = 0.0f32;
            let mut mler_sum = 0.0f32;
            for &v in block {
                deviation_sum += (v - mean) * (v - mean);
                mler_sum += sign(low_threshold - v) + 1.0;
            }
            let variance = deviation_sum / block_size as f32;
            LongFrame {
                mean_rms: mean,
                variance_rms: variance,
                normalized_variance_rms: variance / mean,
                mler: mler_sum / (2.0 * block_size as f32),
            }
        };

        debug!(
            second = index,
            mean = frame.mean_rms,
            variance = frame.variance_rms,
            normalized_variance = frame.normalized_variance_rms,
            mler = frame.mler,
            "long frame features"
        );
        frames.push(frame);
    }

    frames
}
