//! Majority-filter label smoothing.
//!
//! A single mislabelled second inside a music bed (or a one-second jingle
//! inside speech) would otherwise split a segment. A ±3 majority vote over
//! the raw labels suppresses that flicker. The three leading and three
//! trailing windows are not voted on; they take forced labels from the
//! configuration (music at the start, speech at the end by default).

/// Half-width of the majority window (±3 → 7 labels per vote).
pub const HALF_WIDTH: usize = 3;

/// Smooth `labels` in place with a 7-wide majority filter.
///
/// Votes read the raw labels, not earlier smoothed output, so one call is
/// one filter pass. The pass is not idempotent: interior runs shorter than
/// the window can keep shrinking on repeated passes. Ties round half-up
/// (4 of 7 wins; with an odd window an exact tie cannot occur, the rule is
/// stated for determinism).
pub fn smooth(labels: &mut [bool], lead_in_is_music: bool, tail_is_music: bool) {
    let n = labels.len();
    if n == 0 {
        return;
    }

    let mut pass = vec![false; n];

    for slot in pass.iter_mut().take(HALF_WIDTH.min(n)) {
        *slot = lead_in_is_music;
    }
    if n > 2 * HALF_WIDTH {
        for i in HALF_WIDTH..n - HALF_WIDTH {
            let votes = labels[i - HALF_WIDTH..=i + HALF_WIDTH]
                .iter()
                .filter(|&&label| label)
                .count();
            pass[i] = 2 * votes >= 2 * HALF_WIDTH + 1;
        }
    }
    // Trailing force wins over the leading one on very short sequences.
    for slot in pass.iter_mut().skip(n.saturating_sub(HALF_WIDTH)) {
        *slot = tail_is_music;
    }

    labels.copy_from_slice(&pass);
}
