//! Device wrapper pairing a strip driver with its pixel count.

use crate::StripDriver;
use crate::color::BYTES_PER_PIXEL;

/// One physical strip: a driver plus the number of pixels it exposes.
///
/// Holds the pixel count so effects and the scheduler do not need to.
pub struct Device<D: StripDriver> {
    driver: D,
    pixel_count: usize,
}

impl<D: StripDriver> Device<D> {
    /// Wrap a driver for a strip of `pixel_count` pixels.
    ///
    /// # Panics
    ///
    /// Panics if `pixel_count` is zero.
    pub fn new(driver: D, pixel_count: usize) -> Self {
        assert!(pixel_count > 0, "device must expose at least one pixel");
        Self {
            driver,
            pixel_count,
        }
    }

    /// Number of pixels on this strip.
    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Transmit one frame to the strip.
    ///
    /// # Panics
    ///
    /// Panics if `frame` is not exactly four bytes per pixel; a frame of
    /// any other length would corrupt hardware state.
    pub fn write(&mut self, frame: &[u8]) -> Result<(), D::Error> {
        assert_eq!(
            frame.len(),
            self.pixel_count * BYTES_PER_PIXEL,
            "frame length must match the strip"
        );
        self.driver.write(frame)
    }
}
