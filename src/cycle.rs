//! Time-quantized selection over ordered sequences.
//!
//! One quantizer serves both concerns of the engine: picking the active
//! palette of a color schedule and picking the active effect of the
//! carousel.

use embassy_time::Duration;

/// Select the element of `sequence` active at `elapsed`.
///
/// The index advances by one every `period` and wraps, so the selection is
/// periodic with period `period * sequence.len()`.
///
/// # Panics
///
/// Panics if `period` is zero or `sequence` is empty. Both are caller
/// contract violations; configuration must be validated where it is
/// assembled.
pub fn select<T>(elapsed: Duration, period: Duration, sequence: &[T]) -> &T {
    assert!(period.as_ticks() > 0, "cycle period must be non-zero");
    assert!(!sequence.is_empty(), "cannot cycle over an empty sequence");

    #[allow(clippy::cast_possible_truncation)]
    let index = ((elapsed.as_ticks() / period.as_ticks()) % sequence.len() as u64) as usize;
    &sequence[index]
}
