//! Effect system with compile-time known effect variants
//!
//! The effect set is closed, so all effects are stored in an enum and
//! dispatched with a match. Each effect is a pure function of elapsed time,
//! its configuration and the frame length; no state survives between
//! render calls.

mod band;
mod spread;
mod swirl;

use embassy_time::Duration;
pub use band::BandEffect;
pub use spread::SpreadEffect;
pub use swirl::SwirlEffect;

use crate::color::Quad;

const EFFECT_NAME_SWIRL: &str = "swirl";
const EFFECT_NAME_BAND: &str = "band";
const EFFECT_NAME_SPREAD: &str = "spread";

pub trait Effect {
    /// Render a single frame for the given elapsed time.
    ///
    /// `frame` is the blanked, full-length pixel slice for one device.
    fn render(&self, elapsed: Duration, frame: &mut [Quad]);
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot<'a> {
    /// Rotating gradient segments, one per palette color
    Swirl(SwirlEffect<'a>),
    /// Rotating solid band at the tail of each palette segment
    Band(BandEffect<'a>),
    /// Sinusoidally breathing pulse per color
    Spread(SpreadEffect<'a>),
}

impl EffectSlot<'_> {
    /// Render the effect
    pub fn render(&self, elapsed: Duration, frame: &mut [Quad]) {
        match self {
            Self::Swirl(effect) => effect.render(elapsed, frame),
            Self::Band(effect) => effect.render(elapsed, frame),
            Self::Spread(effect) => effect.render(elapsed, frame),
        }
    }

    /// Effect name for external observation
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Swirl(_) => EFFECT_NAME_SWIRL,
            Self::Band(_) => EFFECT_NAME_BAND,
            Self::Spread(_) => EFFECT_NAME_SPREAD,
        }
    }
}

/// Quads an effect actually writes for a palette of `colors` colors.
///
/// Integer division truncates: `frame_len mod colors` tail quads stay
/// blank and are excluded from rotation.
pub(crate) const fn rendered_len(frame_len: usize, colors: usize) -> usize {
    (frame_len / colors) * colors
}
