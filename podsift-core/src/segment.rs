//! Segment detection, merging, and boundary growth.
//!
//! ## Two-phase merge
//!
//! 1. **Run detection** — scan the smoothed labels and open a new segment
//!    whenever the label changes. The first segment always opens as music;
//!    the intro flag can override it later.
//! 2. **Merge** — runs shorter than the configured minimum are absorbed
//!    into the preceding merged segment regardless of their label, and
//!    same-label neighbours collapse. Afterwards boundaries are grown to
//!    leave crossfade room: speech segments expand outward, music segments
//!    contract inward, clamped to the label sequence bounds.

use serde::{Deserialize, Serialize};

/// A contiguous run of long frames sharing a music/speech label.
///
/// `start` and `end` are inclusive long-frame indices (one-second
/// granularity). Converting to sample offsets and rendering fades is the
/// host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// First long frame of the segment.
    pub start: usize,
    /// Last long frame of the segment (inclusive).
    pub end: usize,
    /// `true` for music, `false` for speech.
    pub is_music: bool,
}

impl Segment {
    /// Inclusive length in long frames.
    pub fn duration_long_frames(&self) -> usize {
        self.end - self.start + 1
    }

    /// Start offset in milliseconds given the aggregation window duration.
    pub fn start_ms(&self, aggregation_window_ms: u32) -> u64 {
        self.start as u64 * aggregation_window_ms as u64
    }

    /// End offset in milliseconds (exclusive) given the aggregation window.
    pub fn end_ms(&self, aggregation_window_ms: u32) -> u64 {
        (self.end as u64 + 1) * aggregation_window_ms as u64
    }
}

/// Phase 1: split the label sequence into maximal same-label runs.
///
/// The first run is initialized as music regardless of `labels[0]` and
/// extended while subsequent labels match it.
pub fn detect_runs(labels: &[bool]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for (frame, &label) in labels.iter().enumerate() {
        match segments.last_mut() {
            None => segments.push(Segment {
                start: 0,
                end: 0,
                is_music: true,
            }),
            Some(current) if label == current.is_music => current.end = frame,
            Some(_) => segments.push(Segment {
                start: frame,
                end: frame,
                is_music: label,
            }),
        }
    }

    segments
}

/// Phase 2: absorb short runs and collapse same-label neighbours.
///
/// Precedence matters: the short-run rule is checked before the same-label
/// rule, so a short run extends the previous merged segment even when its
/// label differs. With `has_intro` the first merged segment is forced to
/// speech. Every merged segment meets `min_len` except possibly the final
/// one, which can stay short when the whole label sequence is.
pub fn merge_runs(runs: &[Segment], min_len: usize, has_intro: bool) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::new();

    for (index, run) in runs.iter().enumerate() {
        if index == 0 {
            let mut first = *run;
            if has_intro {
                first.is_music = false;
            }
            merged.push(first);
            continue;
        }
        // merged is non-empty past index 0
        let previous = merged.last_mut().expect("first run already merged");
        if run.duration_long_frames() < min_len || run.is_music == previous.is_music {
            previous.end = run.end;
        } else {
            merged.push(*run);
        }
    }

    merged
}

/// Grow or shrink merged-segment boundaries to create crossfade margins.
///
/// Speech segments expand outward by the margins, music segments contract
/// inward; the first segment's end moves by `grow_after` when an intro is
/// present and by `-grow_before` otherwise. All results are clamped to
/// `[0, long_frame_count)` and a start is never pushed past its end.
pub fn grow_boundaries(
    segments: &mut [Segment],
    grow_before: usize,
    grow_after: usize,
    has_intro: bool,
    long_frame_count: usize,
) {
    if segments.is_empty() || long_frame_count == 0 {
        return;
    }
    let last_frame = (long_frame_count - 1) as i64;
    let before = grow_before as i64;
    let after = grow_after as i64;

    let first = &mut segments[0];
    let end = if has_intro {
        first.end as i64 + after
    } else {
        first.end as i64 - before
    };
    first.end = end.clamp(first.start as i64, last_frame) as usize;

    for seg in segments.iter_mut().skip(1) {
        let (start, end) = if seg.is_music {
            (seg.start as i64 + before, seg.end as i64 - after)
        } else {
            (seg.start as i64 - before, seg.end as i64 + after)
        };
        let end = end.clamp(0, last_frame);
        let start = start.clamp(0, last_frame).min(end);
        seg.start = start as usize;
        seg.end = end as usize;
    }
}
