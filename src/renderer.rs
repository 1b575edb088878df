use embassy_time::Duration;

use crate::color::{BLANK, Quad};
use crate::cycle;
use crate::effect::EffectSlot;

/// Configuration for the engine
///
/// Assembled once by the bootstrap code; the engine exposes no mechanism
/// to change it at runtime.
#[derive(Clone)]
pub struct EngineConfig<'a> {
    /// Ordered, non-empty list of effects to cycle through
    pub effects: &'a [EffectSlot<'a>],
    /// Time each effect stays active
    pub effect_duration: Duration,
    /// Fixed interval between frames
    pub refresh_duration: Duration,
}

/// Composes one frame per device per tick.
///
/// Owns the working pixel buffer and the effect carousel. `MAX_PIXELS` is
/// the largest strip the renderer can serve; each render call uses the
/// prefix matching the device's pixel count.
pub struct Renderer<'a, const MAX_PIXELS: usize> {
    effects: &'a [EffectSlot<'a>],
    effect_duration: Duration,
    frame_buffer: [Quad; MAX_PIXELS],
}

impl<'a, const MAX_PIXELS: usize> Renderer<'a, MAX_PIXELS> {
    /// Create a renderer cycling through `effects`.
    ///
    /// # Panics
    ///
    /// Panics if `effects` is empty or `effect_duration` is zero.
    pub fn new(effects: &'a [EffectSlot<'a>], effect_duration: Duration) -> Self {
        assert!(!effects.is_empty(), "at least one effect must be configured");
        assert!(
            effect_duration.as_ticks() > 0,
            "effect duration must be non-zero"
        );
        Self {
            effects,
            effect_duration,
            frame_buffer: [BLANK; MAX_PIXELS],
        }
    }

    /// Index of the effect active at `elapsed`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn active_index(&self, elapsed: Duration) -> usize {
        ((elapsed.as_ticks() / self.effect_duration.as_ticks()) % self.effects.len() as u64)
            as usize
    }

    /// The effect active at `elapsed`.
    pub fn active_effect(&self, elapsed: Duration) -> &'a EffectSlot<'a> {
        cycle::select(elapsed, self.effect_duration, self.effects)
    }

    /// Render one frame for a strip of `pixel_count` pixels.
    ///
    /// The working buffer is blanked first, so every call starts from a
    /// fresh frame. Returns the frame as raw channel bytes, exactly four
    /// per pixel.
    ///
    /// # Panics
    ///
    /// Panics if `pixel_count` is zero or exceeds `MAX_PIXELS`.
    pub fn render(&mut self, elapsed: Duration, pixel_count: usize) -> &[u8] {
        let effect = self.active_effect(elapsed);
        let frame = self.frame_mut(pixel_count);
        effect.render(elapsed, frame);
        self.frame_buffer[..pixel_count].as_flattened()
    }

    /// An all-off frame for a strip of `pixel_count` pixels.
    ///
    /// Used to drop stale pixels at startup.
    pub fn blank(&mut self, pixel_count: usize) -> &[u8] {
        self.frame_mut(pixel_count);
        self.frame_buffer[..pixel_count].as_flattened()
    }

    /// Blanked working slice for one device.
    fn frame_mut(&mut self, pixel_count: usize) -> &mut [Quad] {
        assert!(pixel_count > 0, "pixel count must be non-zero");
        assert!(
            pixel_count <= MAX_PIXELS,
            "pixel count exceeds renderer capacity"
        );
        let frame = &mut self.frame_buffer[..pixel_count];
        frame.fill(BLANK);
        frame
    }
}
