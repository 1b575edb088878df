#![no_std]

pub mod color;
pub mod cycle;
pub mod device;
pub mod effect;
pub mod frame_scheduler;
pub mod renderer;
pub mod transform;

pub use color::{ColorSchedule, ColorSet, Quad, Rgbw, rgbw, rgbw_from_u32};
pub use device::Device;
pub use effect::{BandEffect, Effect, EffectSlot, SpreadEffect, SwirlEffect};
pub use frame_scheduler::FrameScheduler;
pub use renderer::{EngineConfig, Renderer};
pub use transform::Direction;

pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine is generic over this trait and always hands it a frame of
/// exactly four bytes per pixel; channel order within a quad is fixed by
/// the driver and opaque to the engine.
pub trait StripDriver {
    /// Error reported by a failed transmission.
    type Error;

    /// Write one frame of raw channel bytes to the strip.
    fn write(&mut self, frame: &[u8]) -> Result<(), Self::Error>;
}

/// Fail-stop indicator for unrecoverable hardware faults.
///
/// Invoked by the scheduler when a strip write fails. Implementations
/// signal the fault persistently (for example by blinking an on-board LED)
/// and must never return; the render loop does not resume after a failed
/// transmission.
pub trait FaultIndicator {
    /// Signal the fault forever. Runs until external reset.
    fn signal_forever(&mut self) -> !;
}
