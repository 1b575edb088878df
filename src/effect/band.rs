//! Band effect
//!
//! Lights a solid band of pixels at the tail of each palette segment and
//! rotates the pattern over time.

use embassy_time::Duration;

use super::{Effect, rendered_len};
use crate::{
    color::{BLANK, ColorSchedule, Quad, quad_of},
    cycle,
    transform::{self, Direction},
};

#[derive(Debug, Clone)]
pub struct BandEffect<'a> {
    /// Ordered palettes, cycled by `color_period`
    pub schedule: ColorSchedule<'a>,
    /// Number of lit pixels per segment, at most the segment length
    pub band_size: usize,
    /// Time between single-pixel rotation steps
    pub period: Duration,
    /// Time between palette changes
    pub color_period: Duration,
    /// Rotation orientation
    pub direction: Direction,
}

impl Effect for BandEffect<'_> {
    fn render(&self, elapsed: Duration, frame: &mut [Quad]) {
        let palette = *cycle::select(elapsed, self.color_period, self.schedule);
        let segment_len = frame.len() / palette.len();
        assert!(
            self.band_size <= segment_len,
            "band size exceeds segment length"
        );
        let rendered = rendered_len(frame.len(), palette.len());

        for (segment, &color) in frame[..rendered]
            .chunks_exact_mut(segment_len)
            .zip(palette)
        {
            let (gap, band) = segment.split_at_mut(segment_len - self.band_size);
            gap.fill(BLANK);
            band.fill(quad_of(color));
        }
        transform::rotate(elapsed, self.period, &mut frame[..rendered], self.direction);
    }
}
