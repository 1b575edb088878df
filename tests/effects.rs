mod tests {
    use embassy_time::Duration;
    use light_carousel::color::{Quad, quad_of};
    use light_carousel::{
        BandEffect, Direction, Effect, EffectSlot, Rgbw, SpreadEffect, SwirlEffect, rgbw,
    };

    const MAGENTA: Rgbw = rgbw(255, 0, 255, 0);
    const COOL_WHITE: Rgbw = rgbw(0, 0, 255, 255);
    const WARM: Rgbw = rgbw(0, 100, 255, 0);

    const PAIR: &[Rgbw] = &[MAGENTA, COOL_WHITE];
    const TRIO: &[Rgbw] = &[MAGENTA, COOL_WHITE, WARM];
    const PAIR_SCHEDULE: &[&[Rgbw]] = &[PAIR];
    const TRIO_SCHEDULE: &[&[Rgbw]] = &[TRIO];
    const TWO_STEP_SCHEDULE: &[&[Rgbw]] = &[&[MAGENTA], &[COOL_WHITE]];

    const BLANK: Quad = [0; 4];

    fn band_pair() -> BandEffect<'static> {
        BandEffect {
            schedule: PAIR_SCHEDULE,
            band_size: 5,
            period: Duration::from_millis(100),
            color_period: Duration::from_secs(10),
            direction: Direction::Clockwise,
        }
    }

    #[test]
    fn test_band_lays_gap_then_band_per_segment() {
        let mut frame = [BLANK; 24];
        band_pair().render(Duration::from_millis(0), &mut frame);

        // segment size 12: 7 blank quads then 5 color quads, per palette color
        for i in 0..7 {
            assert_eq!(frame[i], BLANK);
        }
        for i in 7..12 {
            assert_eq!(frame[i], quad_of(MAGENTA));
        }
        for i in 12..19 {
            assert_eq!(frame[i], BLANK);
        }
        for i in 19..24 {
            assert_eq!(frame[i], quad_of(COOL_WHITE));
        }
    }

    #[test]
    fn test_band_rotates_after_one_period() {
        let mut at_start = [BLANK; 24];
        band_pair().render(Duration::from_millis(0), &mut at_start);

        let mut later = [BLANK; 24];
        band_pair().render(Duration::from_millis(150), &mut later);

        for i in 0..24 {
            assert_eq!(later[i], at_start[(i + 23) % 24]);
        }
    }

    #[test]
    #[should_panic(expected = "band size exceeds segment length")]
    fn test_band_rejects_band_wider_than_segment() {
        let effect = BandEffect {
            band_size: 13,
            ..band_pair()
        };
        let mut frame = [BLANK; 24];
        effect.render(Duration::from_millis(0), &mut frame);
    }

    #[test]
    fn test_swirl_tiles_gradient_segments() {
        let effect = SwirlEffect {
            schedule: TRIO_SCHEDULE,
            period: Duration::from_millis(100),
            color_period: Duration::from_secs(10),
            direction: Direction::CounterClockwise,
        };
        let mut frame = [BLANK; 24];
        effect.render(Duration::from_millis(0), &mut frame);

        // segment size 8; each segment starts at full intensity and ramps down
        for (segment, &color) in frame.chunks(8).zip(TRIO) {
            let channels = quad_of(color);
            assert_eq!(segment[0], channels);
            for (i, quad) in segment.iter().enumerate() {
                for channel in 0..4 {
                    let expected =
                        (f32::from(channels[channel]) * (1.0 - i as f32 / 8.0)).round() as u8;
                    assert_eq!(quad[channel], expected);
                }
            }
        }
    }

    #[test]
    fn test_swirl_leaves_truncation_residual_blank() {
        let effect = SwirlEffect {
            schedule: TRIO_SCHEDULE,
            period: Duration::from_millis(100),
            color_period: Duration::from_secs(10),
            direction: Direction::Clockwise,
        };
        // 10 pixels over 3 colors: 9 rendered, 1 residual
        let mut at_start = [BLANK; 10];
        effect.render(Duration::from_millis(0), &mut at_start);
        assert_eq!(at_start[9], BLANK);

        // rotation covers the rendered prefix only; the residual stays put
        let mut later = [BLANK; 10];
        effect.render(Duration::from_millis(150), &mut later);
        assert_eq!(later[9], BLANK);
        for i in 0..9 {
            assert_eq!(later[i], at_start[(i + 8) % 9]);
        }
    }

    #[test]
    fn test_swirl_cycles_color_schedule() {
        let effect = SwirlEffect {
            schedule: TWO_STEP_SCHEDULE,
            period: Duration::from_secs(10),
            color_period: Duration::from_millis(50),
            direction: Direction::CounterClockwise,
        };

        // counter-clockwise fade starts each segment at the palette color,
        // and no rotation step has expired yet at these times
        let mut frame = [BLANK; 12];
        effect.render(Duration::from_millis(0), &mut frame);
        assert_eq!(frame[0], quad_of(MAGENTA));

        effect.render(Duration::from_millis(50), &mut frame);
        assert_eq!(frame[0], quad_of(COOL_WHITE));

        effect.render(Duration::from_millis(100), &mut frame);
        assert_eq!(frame[0], quad_of(MAGENTA));
    }

    #[test]
    fn test_spread_centers_pulse_per_segment() {
        let effect = SpreadEffect {
            colors: PAIR,
            period: Duration::from_millis(250),
        };
        let mut frame = [BLANK; 24];
        effect.render(Duration::from_millis(0), &mut frame);

        // sin(0) = 0 so the radius is segment/4 = 3 around center 6
        for (offset, color) in [(0, MAGENTA), (12, COOL_WHITE)] {
            for i in 0..3 {
                assert_eq!(frame[offset + i], BLANK);
            }
            for i in 3..9 {
                assert_eq!(frame[offset + i], quad_of(color));
            }
            for i in 9..12 {
                assert_eq!(frame[offset + i], BLANK);
            }
        }
    }

    #[test]
    fn test_spread_peak_fills_whole_segment() {
        let effect = SpreadEffect {
            colors: PAIR,
            period: Duration::from_millis(250),
        };
        // elapsed/period = pi/2, the sine peak
        let mut frame = [BLANK; 24];
        effect.render(Duration::from_micros(392_699), &mut frame);

        for (i, quad) in frame.iter().enumerate() {
            let color = if i < 12 { MAGENTA } else { COOL_WHITE };
            assert_eq!(*quad, quad_of(color));
        }
    }

    #[test]
    fn test_spread_obeys_segment_tiling() {
        let effect = SpreadEffect {
            colors: PAIR,
            period: Duration::from_millis(250),
        };
        // 25 pixels over 2 colors: segment 12, residual quad stays blank
        let mut frame = [BLANK; 25];
        effect.render(Duration::from_micros(392_699), &mut frame);

        assert_eq!(frame[24], BLANK);
        assert_eq!(frame[11], quad_of(MAGENTA));
        assert_eq!(frame[12], quad_of(COOL_WHITE));
    }

    #[test]
    #[should_panic(expected = "at least one color")]
    fn test_spread_rejects_empty_colors() {
        let effect = SpreadEffect {
            colors: &[],
            period: Duration::from_millis(250),
        };
        let mut frame = [BLANK; 24];
        effect.render(Duration::from_millis(0), &mut frame);
    }

    #[test]
    fn test_effect_slot_dispatch_matches_direct_render() {
        let mut direct = [BLANK; 24];
        band_pair().render(Duration::from_millis(150), &mut direct);

        let slot = EffectSlot::Band(band_pair());
        let mut dispatched = [BLANK; 24];
        slot.render(Duration::from_millis(150), &mut dispatched);

        assert_eq!(dispatched, direct);
        assert_eq!(slot.name(), "band");
    }
}
