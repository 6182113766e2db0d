// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! GPIO push buttons and the A/B/C button panel.
//!
//! [`Buttons`] is the robot's [`InputSource`]: it samples the three buttons in A, B, C order,
//! reports the first debounced press, and starts that button's feedback beep. Every poll also
//! advances the tone sequencer, so beeps and tunes keep playing while anything busy-polls input.

use embedded_hal::digital::InputPin;
use log::debug;

use super::{Button, ButtonEvent, Debouncer, InputSource};
use crate::clock::Clock;
use crate::config::{BEEP_BUTTON_A, BEEP_BUTTON_B, BEEP_BUTTON_C, DEFAULT_SETTLE_MS};
use crate::hw::ActiveLevel;
use crate::tone::Tone;

/// A single push button on a GPIO input, with its own debouncer.
pub struct PushButton<P: InputPin> {
    pin: P,
    active: ActiveLevel,
    debouncer: Debouncer,
}

impl<P: InputPin> PushButton<P> {
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self {
            pin,
            active,
            debouncer: Debouncer::new(DEFAULT_SETTLE_MS),
        }
    }

    /// Button wired to ground with a pull-up: pressed reads low.
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    pub fn active_high(pin: P) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    /// Instantaneous pressed level. A pin read error counts as not pressed.
    pub fn is_pressed(&mut self) -> bool {
        match self.active {
            ActiveLevel::High => self.pin.is_high().unwrap_or(false),
            ActiveLevel::Low => self.pin.is_low().unwrap_or(false),
        }
    }

    /// Sample the pin and return `true` once per debounced press.
    pub fn single_debounced_press(&mut self, now_ms: u32) -> bool {
        let pressed = self.is_pressed();
        self.debouncer.update(pressed, now_ms)
    }

    #[inline]
    pub fn debouncer_mut(&mut self) -> &mut Debouncer {
        &mut self.debouncer
    }

    pub fn free(self) -> P {
        self.pin
    }
}

/// The robot's three-button panel plus the buzzer used for press feedback.
pub struct Buttons<A, B, C, K, T>
where
    A: InputPin,
    B: InputPin,
    C: InputPin,
{
    a: PushButton<A>,
    b: PushButton<B>,
    c: PushButton<C>,
    clock: K,
    tone: T,
}

impl<A, B, C, K, T> Buttons<A, B, C, K, T>
where
    A: InputPin,
    B: InputPin,
    C: InputPin,
    K: Clock,
    T: Tone,
{
    pub fn new(a: PushButton<A>, b: PushButton<B>, c: PushButton<C>, clock: K, tone: T) -> Self {
        Self {
            a,
            b,
            c,
            clock,
            tone,
        }
    }

    /// Use a different settle interval for all three buttons.
    pub fn with_settle_ms(mut self, settle_ms: u32) -> Self {
        self.a.debouncer_mut().set_settle_ms(settle_ms);
        self.b.debouncer_mut().set_settle_ms(settle_ms);
        self.c.debouncer_mut().set_settle_ms(settle_ms);
        self
    }

    /// Access the feedback tone.
    #[inline]
    pub fn tone(&mut self) -> &mut T {
        &mut self.tone
    }

    fn beep(&mut self, button: Button) {
        let tune = match button {
            Button::A => BEEP_BUTTON_A,
            Button::B => BEEP_BUTTON_B,
            Button::C => BEEP_BUTTON_C,
        };
        self.tone.play(tune);
    }

    fn first_press(&mut self, now_ms: u32) -> Option<Button> {
        if self.a.single_debounced_press(now_ms) {
            return Some(Button::A);
        }
        if self.b.single_debounced_press(now_ms) {
            return Some(Button::B);
        }
        if self.c.single_debounced_press(now_ms) {
            return Some(Button::C);
        }
        None
    }
}

impl<A, B, C, K, T> InputSource for Buttons<A, B, C, K, T>
where
    A: InputPin,
    B: InputPin,
    C: InputPin,
    K: Clock,
    T: Tone,
{
    fn poll(&mut self) -> ButtonEvent {
        self.tone.update();

        let now = self.clock.now_ms();
        match self.first_press(now) {
            Some(button) => {
                debug!("button {:?} pressed at {} ms", button, now);
                self.beep(button);
                ButtonEvent::press(button)
            }
            None => ButtonEvent::None,
        }
    }

    fn is_held(&mut self, button: Button) -> bool {
        match button {
            Button::A => self.a.is_pressed(),
            Button::B => self.b.is_pressed(),
            Button::C => self.c.is_pressed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Input pin reading a shared electrical level (`true` = high).
    struct LevelPin<'a>(&'a Cell<bool>);

    impl ErrorType for LevelPin<'_> {
        type Error = Infallible;
    }

    impl InputPin for LevelPin<'_> {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.0.get())
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.0.get())
        }
    }

    struct TestClock(Cell<u32>);

    impl Clock for TestClock {
        fn now_ms(&self) -> u32 {
            self.0.get()
        }
    }

    #[derive(Default)]
    struct RecordingTone {
        played: Vec<&'static str>,
        updates: usize,
    }

    impl Tone for RecordingTone {
        fn play(&mut self, tune: &'static str) {
            self.played.push(tune);
        }

        fn stop(&mut self) {}

        fn is_playing(&self) -> bool {
            false
        }

        fn update(&mut self) {
            self.updates += 1;
        }
    }

    struct Rig {
        a: Cell<bool>,
        b: Cell<bool>,
        c: Cell<bool>,
        clock: TestClock,
    }

    impl Rig {
        fn new() -> Self {
            // Pull-ups: released buttons read high.
            Self {
                a: Cell::new(true),
                b: Cell::new(true),
                c: Cell::new(true),
                clock: TestClock(Cell::new(0)),
            }
        }

        fn buttons(
            &self,
        ) -> Buttons<LevelPin<'_>, LevelPin<'_>, LevelPin<'_>, &TestClock, RecordingTone> {
            Buttons::new(
                PushButton::active_low(LevelPin(&self.a)),
                PushButton::active_low(LevelPin(&self.b)),
                PushButton::active_low(LevelPin(&self.c)),
                &self.clock,
                RecordingTone::default(),
            )
        }

        /// Poll once per millisecond for `ms`, collecting non-`None` events.
        fn poll_for<I: InputSource>(&self, input: &mut I, ms: u32) -> Vec<ButtonEvent> {
            let mut events = Vec::new();
            for _ in 0..ms {
                let e = input.poll();
                if e != ButtonEvent::None {
                    events.push(e);
                }
                self.clock.0.set(self.clock.0.get() + 1);
            }
            events
        }
    }

    #[test]
    fn held_button_reports_once_and_beeps() {
        let rig = Rig::new();
        let mut buttons = rig.buttons();

        assert!(rig.poll_for(&mut buttons, 30).is_empty());
        rig.c.set(false);
        assert_eq!(rig.poll_for(&mut buttons, 2_000), [ButtonEvent::PressC]);
        rig.c.set(true);
        assert!(rig.poll_for(&mut buttons, 30).is_empty());

        assert_eq!(buttons.tone().played, [BEEP_BUTTON_C]);
    }

    #[test]
    fn idle_panel_is_silent() {
        let rig = Rig::new();
        let mut buttons = rig.buttons();

        assert!(rig.poll_for(&mut buttons, 5_000).is_empty());
        assert!(buttons.tone().played.is_empty());
        assert_eq!(buttons.tone().updates, 5_000);
    }

    #[test]
    fn each_button_has_its_own_beep() {
        let rig = Rig::new();
        let mut buttons = rig.buttons();
        rig.poll_for(&mut buttons, 30);

        let mut events = Vec::new();
        for level in [&rig.a, &rig.b, &rig.c] {
            level.set(false);
            events.extend(rig.poll_for(&mut buttons, 30));
            level.set(true);
            rig.poll_for(&mut buttons, 30);
        }

        assert_eq!(
            events,
            [ButtonEvent::PressA, ButtonEvent::PressB, ButtonEvent::PressC]
        );
        assert_eq!(
            buttons.tone().played,
            [BEEP_BUTTON_A, BEEP_BUTTON_B, BEEP_BUTTON_C]
        );
    }

    #[test]
    fn simultaneous_presses_come_out_one_per_poll() {
        let rig = Rig::new();
        let mut buttons = rig.buttons();
        rig.poll_for(&mut buttons, 30);

        rig.a.set(false);
        rig.c.set(false);
        let events = rig.poll_for(&mut buttons, 100);

        assert_eq!(events, [ButtonEvent::PressA, ButtonEvent::PressC]);
    }

    #[test]
    fn is_held_follows_the_raw_level() {
        let rig = Rig::new();
        let mut buttons = rig.buttons();

        assert!(!buttons.is_held(Button::B));
        rig.b.set(false);
        assert!(buttons.is_held(Button::B));
        assert!(!buttons.is_held(Button::A));
        // The held query alone never produces an event.
        rig.b.set(true);
        assert!(rig.poll_for(&mut buttons, 30).is_empty());
    }

    #[test]
    fn settle_interval_is_configurable() {
        let rig = Rig::new();
        let mut buttons = rig.buttons().with_settle_ms(50);
        rig.poll_for(&mut buttons, 60);

        rig.a.set(false);
        assert!(rig.poll_for(&mut buttons, 40).is_empty());
        assert_eq!(rig.poll_for(&mut buttons, 20), [ButtonEvent::PressA]);
    }
}
