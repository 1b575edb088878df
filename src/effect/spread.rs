//! Spread effect
//!
//! One symmetric pulse per color whose width breathes sinusoidally with
//! time. Unlike the rotating effects there is no schedule and no movement;
//! each color owns a fixed segment of the strip.

use embassy_time::Duration;

use super::{Effect, rendered_len};
use crate::color::{BLANK, ColorSet, Quad, quad_of};

#[derive(Debug, Clone)]
pub struct SpreadEffect<'a> {
    /// One pulse per color, in strip order
    pub colors: ColorSet<'a>,
    /// Breathing time scale; the pulse width has period `2*pi*period`
    pub period: Duration,
}

impl Effect for SpreadEffect<'_> {
    fn render(&self, elapsed: Duration, frame: &mut [Quad]) {
        assert!(self.period.as_ticks() > 0, "spread period must be non-zero");
        assert!(
            !self.colors.is_empty(),
            "spread requires at least one color"
        );

        let segment_len = frame.len() / self.colors.len();
        let center = segment_len / 2;
        let radius = pulse_radius(elapsed, self.period, segment_len).min(center);
        let rendered = rendered_len(frame.len(), self.colors.len());

        for (segment, &color) in frame[..rendered]
            .chunks_exact_mut(segment_len)
            .zip(self.colors)
        {
            segment.fill(BLANK);
            segment[center - radius..center + radius].fill(quad_of(color));
        }
    }
}

/// Half-width of the pulse at `elapsed`, in pixels.
///
/// `round((sin(t/period) + 1) * segment_len / 4)`, oscillating between 0
/// and roughly half the segment. The caller clamps to the segment center.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn pulse_radius(elapsed: Duration, period: Duration, segment_len: usize) -> usize {
    let phase = elapsed.as_micros() as f64 / period.as_micros() as f64;
    let swell = libm::sin(phase) + 1.0;
    libm::round(swell * segment_len as f64 / 4.0) as usize
}
