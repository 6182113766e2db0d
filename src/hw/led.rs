// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Indicator LEDs.

use embedded_hal::digital::OutputPin;

/// Whether a pin is active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

/// LED abstraction that remembers its active level and last known state.
pub struct Led<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    is_on: bool,
}

impl<PIN: OutputPin> Led<PIN> {
    /// Create an LED wrapper, initializing it to OFF.
    pub fn new(mut pin: PIN, active: ActiveLevel) -> Self {
        match active {
            ActiveLevel::High => pin.set_low().ok(),
            ActiveLevel::Low => pin.set_high().ok(),
        };
        Self {
            pin,
            active,
            is_on: false,
        }
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    /// Drive the LED logically ON (true) or OFF (false).
    pub fn set(&mut self, on: bool) {
        let high = match self.active {
            ActiveLevel::High => on,
            ActiveLevel::Low => !on,
        };
        self.pin.set_state(high.into()).ok();
        self.is_on = on;
    }

    #[inline]
    pub fn on(&mut self) {
        self.set(true);
    }

    #[inline]
    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn toggle(&mut self) {
        self.set(!self.is_on);
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LedColor {
    Red,
    Green,
    Yellow,
}

impl LedColor {
    /// Order the LED demo cycles through.
    pub const CYCLE: [LedColor; 3] = [LedColor::Red, LedColor::Green, LedColor::Yellow];

    pub fn name(self) -> &'static str {
        match self {
            LedColor::Red => "Red",
            LedColor::Green => "Green",
            LedColor::Yellow => "Yellow",
        }
    }
}

/// The robot's three indicator LEDs, of which the demos light at most one at a time.
pub struct StatusLeds<R: OutputPin, G: OutputPin, Y: OutputPin> {
    pub red: Led<R>,
    pub green: Led<G>,
    pub yellow: Led<Y>,
}

impl<R: OutputPin, G: OutputPin, Y: OutputPin> StatusLeds<R, G, Y> {
    pub fn new(red: Led<R>, green: Led<G>, yellow: Led<Y>) -> Self {
        Self { red, green, yellow }
    }

    /// Light only `color`, or nothing.
    pub fn show(&mut self, color: Option<LedColor>) {
        self.red.set(color == Some(LedColor::Red));
        self.green.set(color == Some(LedColor::Green));
        self.yellow.set(color == Some(LedColor::Yellow));
    }

    #[inline]
    pub fn all_off(&mut self) {
        self.show(None);
    }

    /// The lit LED, if exactly one is on.
    pub fn lit(&self) -> Option<LedColor> {
        match (self.red.is_on(), self.green.is_on(), self.yellow.is_on()) {
            (true, false, false) => Some(LedColor::Red),
            (false, true, false) => Some(LedColor::Green),
            (false, false, true) => Some(LedColor::Yellow),
            _ => None,
        }
    }
}
