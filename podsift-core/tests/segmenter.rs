//! End-to-end pipeline tests over synthesized audio.

use podsift_core::{BufferSource, PipelineConfig, PodsiftError, Segmenter};

const RATE: u32 = 16_000;

/// Append `count` seconds of sustained "music": constant-envelope signal,
/// every 20 ms window at the block mean, MLER 0.
fn push_music(out: &mut Vec<f32>, count: usize) {
    for _ in 0..count * RATE as usize {
        let sign = if out.len() % 2 == 0 { 1.0 } else { -1.0 };
        out.push(0.35 * sign);
    }
}

/// Append `count` seconds of "speech": energy pulsing window to window so
/// roughly half the RMS windows fall under the scaled mean.
fn push_speech(out: &mut Vec<f32>, count: usize) {
    for _ in 0..count {
        for i in 0..RATE as usize {
            let amp = if (i / 320) % 2 == 0 { 0.35 } else { 0.001 };
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            out.push(amp * sign);
        }
    }
}

#[test]
fn podcast_shape_yields_alternating_segments() {
    // 15 s music bed, 30 s talk, 15 s music, 30 s talk.
    let mut samples = Vec::new();
    push_music(&mut samples, 15);
    push_speech(&mut samples, 30);
    push_music(&mut samples, 15);
    push_speech(&mut samples, 30);

    let segmenter = Segmenter::new(PipelineConfig::default()).unwrap();
    let mut source = BufferSource::new(&samples, RATE);
    let segments = segmenter.segment(&mut source).unwrap();

    assert_eq!(segments.len(), 4, "segments: {segments:?}");
    assert!(segments[0].is_music);
    assert!(!segments[1].is_music);
    assert!(segments[2].is_music);
    assert!(!segments[3].is_music);

    // Ordered, in bounds, speech overlapping the contracted music edges.
    for pair in segments.windows(2) {
        assert!(pair[0].start <= pair[0].end);
        assert!(pair[1].start <= pair[0].end + 1, "gap between {pair:?}");
    }
    assert_eq!(segments[0].start, 0);
    assert!(segments[3].end < 90);
}

#[test]
fn intro_flag_forces_first_segment_to_speech() {
    let mut samples = Vec::new();
    push_music(&mut samples, 15);
    push_speech(&mut samples, 30);

    let config = PipelineConfig {
        has_intro: true,
        ..Default::default()
    };
    let segmenter = Segmenter::new(config).unwrap();
    let mut source = BufferSource::new(&samples, RATE);
    let segments = segmenter.segment(&mut source).unwrap();

    assert!(
        !segments[0].is_music,
        "intro flag must override the computed label: {segments:?}"
    );
}

#[test]
fn segmentation_is_invariant_under_amplitude_scaling() {
    // MLER compares energies against a mean-scaled threshold, so a linear
    // gain change must not move any boundary.
    let mut samples = Vec::new();
    push_music(&mut samples, 15);
    push_speech(&mut samples, 30);
    push_music(&mut samples, 15);
    let quiet: Vec<f32> = samples.iter().map(|&s| s * 0.1).collect();

    let segmenter = Segmenter::new(PipelineConfig::default()).unwrap();
    let loud_segments = segmenter
        .segment(&mut BufferSource::new(&samples, RATE))
        .unwrap();
    let quiet_segments = segmenter
        .segment(&mut BufferSource::new(&quiet, RATE))
        .unwrap();

    assert_eq!(loud_segments, quiet_segments);
}

#[test]
fn sub_second_input_fails_without_partial_results() {
    let samples = vec![0.2f32; (RATE / 2) as usize];
    let segmenter = Segmenter::new(PipelineConfig::default()).unwrap();
    let err = segmenter
        .segment(&mut BufferSource::new(&samples, RATE))
        .unwrap_err();
    assert!(matches!(err, PodsiftError::InsufficientData { .. }));
}

#[test]
fn trailing_partial_second_is_ignored() {
    let mut samples = Vec::new();
    push_music(&mut samples, 15);
    push_speech(&mut samples, 30);
    // 400 ms of extra music that does not fill an aggregation window.
    push_music(&mut samples, 1);
    samples.truncate(45 * RATE as usize + (RATE as usize * 2 / 5));

    let segmenter = Segmenter::new(PipelineConfig::default()).unwrap();
    let segments = segmenter
        .segment(&mut BufferSource::new(&samples, RATE))
        .unwrap();
    assert!(segments.iter().all(|s| s.end < 45));
}
