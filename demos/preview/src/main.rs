//! Terminal preview for light-carousel effects
//!
//! Renders one simulated 24-pixel ring as a line of truecolor blocks and
//! runs the same bootstrap wiring an embedded target would: blank the
//! strip, then tick the scheduler forever at the configured refresh rate.

use std::io::{Write as _, stdout};
use std::thread;

use embassy_time::{Duration, Instant};
use light_carousel::{
    BandEffect, Device, Direction, EffectSlot, EngineConfig, FaultIndicator, FrameScheduler,
    Rgbw, SpreadEffect, StripDriver, SwirlEffect, rgbw, rgbw_from_u32,
};

/// Largest strip the renderer is sized for
const MAX_PIXELS: usize = 64;

/// Pixels on the simulated ring
const NUM_PIXELS: usize = 24;

const SWIRL_SCHEDULE: &[&[Rgbw]] = &[
    &[rgbw(0, 255, 0, 255), rgbw(255, 0, 0, 255), rgbw(0, 0, 255, 255)],
    &[rgbw(0, 100, 255, 0), rgbw(0, 100, 255, 0)],
    &[rgbw(0, 0, 255, 255), rgbw(255, 0, 255, 0)],
];

const BAND_SCHEDULE: &[&[Rgbw]] = &[&[rgbw(255, 0, 255, 0), rgbw(0, 0, 255, 255)]];

const SPREAD_COLORS: &[Rgbw] = &[rgbw_from_u32(0x0000_FFFF), rgbw_from_u32(0x0000_FF00)];

static EFFECTS: [EffectSlot<'static>; 3] = [
    EffectSlot::Swirl(SwirlEffect {
        schedule: SWIRL_SCHEDULE,
        period: Duration::from_millis(65),
        color_period: Duration::from_millis(3_250),
        direction: Direction::Clockwise,
    }),
    EffectSlot::Band(BandEffect {
        schedule: BAND_SCHEDULE,
        band_size: 5,
        period: Duration::from_millis(100),
        color_period: Duration::from_secs(2),
        direction: Direction::Clockwise,
    }),
    EffectSlot::Spread(SpreadEffect {
        colors: SPREAD_COLORS,
        period: Duration::from_millis(250),
    }),
];

/// Draws a frame as a line of colored blocks on the current terminal row.
///
/// The white channel is folded into the color channels for display.
struct TerminalStrip;

impl StripDriver for TerminalStrip {
    type Error = std::io::Error;

    fn write(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        let mut out = stdout().lock();
        write!(out, "\r")?;
        for quad in frame.chunks_exact(4) {
            let white = quad[3];
            let r = quad[0].saturating_add(white);
            let g = quad[1].saturating_add(white);
            let b = quad[2].saturating_add(white);
            write!(out, "\x1b[38;2;{r};{g};{b}m\u{2588}\u{2588}")?;
        }
        write!(out, "\x1b[0m")?;
        out.flush()
    }
}

/// Console stand-in for the on-board blink indicator.
struct ConsoleIndicator;

impl FaultIndicator for ConsoleIndicator {
    fn signal_forever(&mut self) -> ! {
        loop {
            eprintln!("strip fault, waiting for reset");
            thread::sleep(std::time::Duration::from_millis(500));
        }
    }
}

fn main() {
    let config = EngineConfig {
        effects: &EFFECTS,
        effect_duration: Duration::from_secs(10),
        refresh_duration: Duration::from_millis(50),
    };

    let start = Instant::now();
    let mut scheduler = FrameScheduler::<TerminalStrip, ConsoleIndicator, MAX_PIXELS, 2>::new(
        &config,
        ConsoleIndicator,
        start,
    );
    scheduler
        .attach(Device::new(TerminalStrip, NUM_PIXELS))
        .ok();

    // drop anything a previous run left on screen
    scheduler.clear_all();

    loop {
        let now = Instant::now();
        let sleep = scheduler.tick(now);

        let name = scheduler.renderer().active_effect(now - start).name();
        print!("  {name}\x1b[K");
        stdout().flush().ok();

        thread::sleep(std::time::Duration::from_millis(sleep.as_millis()));
    }
}
