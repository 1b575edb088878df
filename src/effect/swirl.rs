//! Swirl effect
//!
//! Tiles the strip with one gradient segment per palette color and rotates
//! the whole pattern over time. The palette itself cycles through a color
//! schedule on its own period.

use embassy_time::Duration;

use super::{Effect, rendered_len};
use crate::{
    color::{ColorSchedule, Quad},
    cycle,
    transform::{self, Direction},
};

#[derive(Debug, Clone)]
pub struct SwirlEffect<'a> {
    /// Ordered palettes, cycled by `color_period`
    pub schedule: ColorSchedule<'a>,
    /// Time between single-pixel rotation steps
    pub period: Duration,
    /// Time between palette changes
    pub color_period: Duration,
    /// Rotation and fade orientation
    pub direction: Direction,
}

impl Effect for SwirlEffect<'_> {
    fn render(&self, elapsed: Duration, frame: &mut [Quad]) {
        let palette = *cycle::select(elapsed, self.color_period, self.schedule);
        let segment_len = frame.len() / palette.len();
        let rendered = rendered_len(frame.len(), palette.len());

        for (segment, &color) in frame[..rendered]
            .chunks_exact_mut(segment_len)
            .zip(palette)
        {
            transform::fade(segment, color, self.direction);
        }
        transform::rotate(elapsed, self.period, &mut frame[..rendered], self.direction);
    }
}
