//! Pure pixel-buffer transforms.
//!
//! Both transforms share the [`Direction`] sign convention: the enum
//! discriminant is the sign applied to the time-derived shift, and the
//! same sign picks the orientation of the gradient ramp.

use embassy_time::Duration;

use crate::color::{Quad, Rgbw, quad_of};

/// Rotation and fade orientation.
///
/// The discriminant is the shift sign used by [`rotate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i8)]
pub enum Direction {
    Clockwise = -1,
    CounterClockwise = 1,
}

impl Direction {
    /// Sign applied to time-derived shifts.
    pub const fn sign(self) -> i8 {
        self as i8
    }
}

/// Cyclically rotate `pixels` by one position per elapsed `period`.
///
/// Output quad `i` equals input quad `(i + steps * sign) mod len`, so the
/// rotation is a length-preserving bijection. For `elapsed < period` it is
/// the identity.
///
/// # Panics
///
/// Panics if `period` is zero or `pixels` is empty.
pub fn rotate(elapsed: Duration, period: Duration, pixels: &mut [Quad], direction: Direction) {
    assert!(period.as_ticks() > 0, "rotation period must be non-zero");
    assert!(!pixels.is_empty(), "cannot rotate an empty pixel buffer");

    #[allow(clippy::cast_possible_truncation)]
    let steps = ((elapsed.as_ticks() / period.as_ticks()) % pixels.len() as u64) as usize;
    match direction {
        Direction::Clockwise => pixels.rotate_right(steps),
        Direction::CounterClockwise => pixels.rotate_left(steps),
    }
}

/// Fill `segment` with a linear brightness ramp of `color`.
///
/// Position `i` of `n` is scaled by `1 - i/n` for
/// [`Direction::CounterClockwise`] (full intensity at the segment start)
/// and by `i/n` for [`Direction::Clockwise`] (ramping up from off).
/// Channels are rounded and clamped to the byte range before storage.
pub fn fade(segment: &mut [Quad], color: Rgbw, direction: Direction) {
    let len = segment.len();
    let channels = quad_of(color);

    let base: f32 = match direction {
        Direction::CounterClockwise => 1.0,
        Direction::Clockwise => 0.0,
    };
    let slope = -f32::from(direction.sign());

    for (i, quad) in segment.iter_mut().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let ratio = i as f32 / len as f32;
        let scale = base + slope * ratio;
        for (out, &channel) in quad.iter_mut().zip(channels.iter()) {
            *out = scale_channel(channel, scale);
        }
    }
}

/// Scale one channel byte, rounding and clamping to the representable range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(value: u8, scale: f32) -> u8 {
    libm::roundf(f32::from(value) * scale).clamp(0.0, 255.0) as u8
}
