//! Frame scheduling for the render/transmit loop.
//!
//! Drives every attached device from one shared elapsed time per tick.
//! The caller owns the actual loop and the platform sleep; in normal
//! operation the loop never exits.

use embassy_time::{Duration, Instant};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::device::Device;
use crate::renderer::{EngineConfig, Renderer};
use crate::{FaultIndicator, StripDriver};

/// Orchestrates rendering and transmission across devices.
///
/// Holds the wall-clock start instant, captured once at construction, and
/// the fixed refresh cadence. Pacing is open-loop: `tick` returns the
/// refresh interval unchanged, so the actual frame cadence drifts by the
/// render and transmit cost each tick.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(&config, indicator, Instant::now());
/// scheduler.attach(Device::new(driver, 24)).ok();
/// scheduler.clear_all();
///
/// loop {
///     let sleep = scheduler.tick(Instant::now());
///     // Platform-specific sleep
///     sleep_ms(sleep.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, D, F, const MAX_PIXELS: usize, const MAX_DEVICES: usize>
where
    D: StripDriver,
    F: FaultIndicator,
{
    renderer: Renderer<'a, MAX_PIXELS>,
    devices: Vec<Device<D>, MAX_DEVICES>,
    fault: F,
    refresh_duration: Duration,
    start: Instant,
}

impl<'a, D, F, const MAX_PIXELS: usize, const MAX_DEVICES: usize>
    FrameScheduler<'a, D, F, MAX_PIXELS, MAX_DEVICES>
where
    D: StripDriver,
    F: FaultIndicator,
{
    /// Create a scheduler from the bootstrap configuration.
    ///
    /// `start` is the reference instant all elapsed times are measured
    /// from; pass the current instant at startup.
    ///
    /// # Panics
    ///
    /// Panics if `refresh_duration` is zero (the effect list and effect
    /// duration are checked by [`Renderer::new`]).
    pub fn new(config: &EngineConfig<'a>, fault: F, start: Instant) -> Self {
        assert!(
            config.refresh_duration.as_ticks() > 0,
            "refresh duration must be non-zero"
        );
        Self {
            renderer: Renderer::new(config.effects, config.effect_duration),
            devices: Vec::new(),
            fault,
            refresh_duration: config.refresh_duration,
            start,
        }
    }

    /// Attach a device to the scheduler.
    ///
    /// Returns the device if all `MAX_DEVICES` slots are taken.
    pub fn attach(&mut self, device: Device<D>) -> Result<(), Device<D>> {
        self.devices.push(device)
    }

    /// Blank every strip.
    ///
    /// Called once at startup so pixels left lit by a previous run are
    /// dropped before the first frame.
    pub fn clear_all(&mut self) {
        for device in self.devices.iter_mut() {
            let frame = self.renderer.blank(device.pixel_count());
            if device.write(frame).is_err() {
                self.fault.signal_forever();
            }
        }
    }

    /// Render and transmit one frame to every device.
    ///
    /// All devices share the same elapsed time and therefore the same
    /// active effect within one tick. Returns the fixed interval to sleep
    /// before the next tick.
    ///
    /// A failed transmission is fail-stop: the fault indicator is engaged
    /// and this method never returns.
    pub fn tick(&mut self, now: Instant) -> Duration {
        let elapsed = now - self.start;
        for device in self.devices.iter_mut() {
            let frame = self.renderer.render(elapsed, device.pixel_count());
            if device.write(frame).is_err() {
                #[cfg(feature = "esp32-log")]
                println!("strip write failed, halting render loop");
                self.fault.signal_forever();
            }
        }
        self.refresh_duration
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<'a, MAX_PIXELS> {
        &self.renderer
    }
}
