//! Color types for four-channel (RGBW) strips.
//!
//! Configuration code works with [`Rgbw`] values; the render path works
//! with raw [`Quad`]s so the engine stays agnostic about what the four
//! channels mean to a particular strip.

use smart_leds::{RGBW, White};

/// Four-channel color as seen by configuration code.
pub type Rgbw = RGBW<u8>;

/// Raw channel bytes of one pixel.
pub type Quad = [u8; 4];

/// Number of channel bytes per pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// An off pixel.
pub const BLANK: Quad = [0; 4];

/// One time-slice's palette for an effect.
pub type ColorSet<'a> = &'a [Rgbw];

/// Ordered palettes cycled over time by a color period.
pub type ColorSchedule<'a> = &'a [ColorSet<'a>];

/// Build an [`Rgbw`] color from individual channels.
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw {
        r,
        g,
        b,
        a: White(w),
    }
}

/// Build an [`Rgbw`] color from a `0xRRGGBBWW` literal.
#[allow(clippy::cast_possible_truncation)]
pub const fn rgbw_from_u32(value: u32) -> Rgbw {
    rgbw(
        ((value >> 24) & 0xFF) as u8,
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    )
}

/// Raw channel bytes of a color, in buffer order.
pub const fn quad_of(color: Rgbw) -> Quad {
    [color.r, color.g, color.b, color.a.0]
}
