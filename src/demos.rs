// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Demo routines launched from the main menu.
//!
//! Each demo draws the back-arrow layout, runs its own poll loop until `B` is pressed, and then
//! returns to the menu. Hardware beyond the display and the input source is passed in by the
//! caller, which wraps the demo in a menu action.

use embedded_hal::digital::OutputPin;
use log::debug;

use crate::clock::{elapsed_ms, Clock};
use crate::config::{FUGUE, FUGUE_TITLE, LED_PERIOD_MS, LED_TONES, TITLE_SCROLL_MS};
use crate::display::CharDisplay;
use crate::hw::{LedColor, StatusLeds};
use crate::input::{Button, ButtonEvent, InputSource};
use crate::screens::back_arrow;
use crate::tone::Tone;

/// Width of the color name field in the LED demo.
const NAME_WIDTH: usize = 6;

/// True once `period` has passed since `last`, or if nothing has happened yet.
fn due(last: Option<u32>, now: u32, period: u32) -> bool {
    last.map_or(true, |t| elapsed_ms(now, t) >= period)
}

/// Light red, green and yellow in turn with a matching tone and the color's name.
pub fn leds<D, I, K, T, R, G, Y>(
    display: &mut D,
    input: &mut I,
    clock: &K,
    tone: &mut T,
    leds: &mut StatusLeds<R, G, Y>,
) where
    D: CharDisplay,
    I: InputSource,
    K: Clock,
    T: Tone,
    R: OutputPin,
    G: OutputPin,
    Y: OutputPin,
{
    back_arrow(display);

    let mut step = LedColor::CYCLE.len() - 1;
    let mut last = None;
    while input.poll() != ButtonEvent::PressB {
        let now = clock.now_ms();
        if !due(last, now, LED_PERIOD_MS) {
            continue;
        }
        last = Some(now);
        step = (step + 1) % LedColor::CYCLE.len();

        let color = LedColor::CYCLE[step];
        debug!("led demo: {}", color.name());
        tone.play(LED_TONES[step]);
        display.goto_xy(0, 0);
        display.print(color.name());
        for _ in color.name().len()..NAME_WIDTH {
            display.write_byte(b' ');
        }
        leds.show(Some(color));
    }

    leds.all_off();
}

/// Live view of which buttons are held down.
pub fn buttons<D: CharDisplay, I: InputSource>(display: &mut D, input: &mut I) {
    back_arrow(display);

    let mut shown: [Option<bool>; 3] = [None; 3];
    while input.poll() != ButtonEvent::PressB {
        for (i, button) in Button::ALL.into_iter().enumerate() {
            let held = input.is_held(button);
            if shown[i] == Some(held) {
                continue;
            }
            shown[i] = Some(held);
            display.goto_xy(1 + 3 * i as u8, 0);
            display.write_byte(if held { b"ABC"[i] } else { b'-' });
        }
    }
}

/// Play the fugue on repeat while its title scrolls across the top row.
///
/// The `B` press that ends the demo starts its own feedback beep, which replaces the fugue.
pub fn music<D, I, K, T>(display: &mut D, input: &mut I, clock: &K, tone: &mut T)
where
    D: CharDisplay,
    I: InputSource,
    K: Clock,
    T: Tone,
{
    back_arrow(display);

    let title = FUGUE_TITLE.as_bytes();
    let width = usize::from(D::COLUMNS);
    let mut pos = 0;
    let mut last = None;
    while input.poll() != ButtonEvent::PressB {
        let now = clock.now_ms();
        if due(last, now, TITLE_SCROLL_MS) {
            last = Some(now);
            display.goto_xy(0, 0);
            display.write_bytes(&title[pos..(pos + width).min(title.len())]);
            pos += 1;
            if pos + width >= title.len() {
                pos = 0;
            }
        }

        if !tone.is_playing() {
            tone.play(FUGUE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::TextFrame;
    use crate::hw::Led;
    use core::cell::Cell;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    type Frame = TextFrame<8, 2>;

    /// Shared millisecond counter.
    struct TestClock<'a>(&'a Cell<u32>);

    impl Clock for TestClock<'_> {
        fn now_ms(&self) -> u32 {
            self.0.get()
        }
    }

    /// Advances time by 1 ms per poll and reports `PressB` at `exit_at`.
    struct Timeline<'a> {
        now: &'a Cell<u32>,
        exit_at: u32,
        held: [bool; 3],
    }

    impl InputSource for Timeline<'_> {
        fn poll(&mut self) -> ButtonEvent {
            self.now.set(self.now.get() + 1);
            if self.now.get() == self.exit_at {
                ButtonEvent::PressB
            } else {
                ButtonEvent::None
            }
        }

        fn is_held(&mut self, button: Button) -> bool {
            self.held[button as usize]
        }
    }

    #[derive(Default)]
    struct Recorder {
        played: Vec<&'static str>,
        playing: bool,
    }

    impl Tone for Recorder {
        fn play(&mut self, tune: &'static str) {
            self.played.push(tune);
            self.playing = true;
        }

        fn stop(&mut self) {
            self.playing = false;
        }

        fn is_playing(&self) -> bool {
            self.playing
        }

        fn update(&mut self) {}
    }

    struct LevelPin<'a>(&'a Cell<bool>);

    impl ErrorType for LevelPin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for LevelPin<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.set(true);
            Ok(())
        }
    }

    #[test]
    fn led_demo_cycles_until_b() {
        let now = Cell::new(0);
        let levels = [Cell::new(false), Cell::new(false), Cell::new(false)];
        let mut status = StatusLeds::new(
            Led::active_high(LevelPin(&levels[0])),
            Led::active_high(LevelPin(&levels[1])),
            Led::active_high(LevelPin(&levels[2])),
        );
        let mut frame = Frame::new();
        let mut tone = Recorder::default();
        let mut input = Timeline {
            now: &now,
            exit_at: 1_300,
            held: [false; 3],
        };

        leds(
            &mut frame,
            &mut input,
            &TestClock(&now),
            &mut tone,
            &mut status,
        );

        // Steps at 1, 501 and 1001 ms.
        assert_eq!(tone.played, ["c32", "e32", "g32"]);
        assert_eq!(frame.row(0), Some(b"Yellow  "));
        assert_eq!(frame.row(1), Some(b"\x7fB      "));
        assert_eq!(status.lit(), None);
        assert!(levels.iter().all(|l| !l.get()));
    }

    #[test]
    fn led_names_overwrite_cleanly() {
        let now = Cell::new(0);
        let levels = [Cell::new(false), Cell::new(false), Cell::new(false)];
        let mut status = StatusLeds::new(
            Led::active_high(LevelPin(&levels[0])),
            Led::active_high(LevelPin(&levels[1])),
            Led::active_high(LevelPin(&levels[2])),
        );
        let mut frame = Frame::new();
        let mut input = Timeline {
            now: &now,
            exit_at: 1_600,
            held: [false; 3],
        };

        leds(
            &mut frame,
            &mut input,
            &TestClock(&now),
            &mut (),
            &mut status,
        );

        // Back to red after yellow.
        assert_eq!(frame.row(0), Some(b"Red     "));
    }

    #[test]
    fn button_view_shows_held_buttons() {
        let now = Cell::new(0);
        let mut frame = Frame::new();
        let mut input = Timeline {
            now: &now,
            exit_at: 3,
            held: [true, false, true],
        };

        buttons(&mut frame, &mut input);

        assert_eq!(frame.row(0), Some(b" A  -  C"));
        assert_eq!(now.get(), 3);
    }

    #[test]
    fn music_scrolls_and_starts_the_fugue_once() {
        let now = Cell::new(0);
        let mut frame = Frame::new();
        let mut tone = Recorder::default();
        let mut input = Timeline {
            now: &now,
            exit_at: 1_000,
            held: [false; 3],
        };

        music(&mut frame, &mut input, &TestClock(&now), &mut tone);

        // Four scroll steps: 1, 251, 501 and 751 ms.
        assert_eq!(frame.row(0), Some(b"    Fugu"));
        assert_eq!(tone.played, [FUGUE]);
    }

    #[test]
    fn music_restarts_a_finished_fugue_and_wraps_the_title() {
        let now = Cell::new(0);
        let mut frame = Frame::new();
        let mut tone = Recorder::default();
        let mut input = Timeline {
            now: &now,
            exit_at: 37 * 250 + 2,
            held: [false; 3],
        };

        music(&mut frame, &mut input, &TestClock(&now), &mut tone);
        // 38 scroll steps covered positions 0..=36 and wrapped back to 0.
        assert_eq!(frame.row(0), Some(b"       F"));

        tone.stop();
        input.exit_at = now.get() + 2;
        music(&mut frame, &mut input, &TestClock(&now), &mut tone);
        assert_eq!(tone.played, [FUGUE, FUGUE]);
    }
}
