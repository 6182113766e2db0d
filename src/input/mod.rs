// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Button Input
//!
//! Turns the three noisy mechanical buttons into clean, edge-triggered press events.
//!
//! ## Modules
//!
//! - [`debounce`] - Per-button settle/edge state machine.
//! - [`buttons`] - GPIO push buttons and the three-button [`InputSource`].

pub mod buttons;
pub mod debounce;

pub use buttons::{Buttons, PushButton};
pub use debounce::Debouncer;

/// Physical button identity.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Button {
    A,
    B,
    C,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::A, Button::B, Button::C];
}

/// Result of one poll: at most one debounced press.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ButtonEvent {
    #[default]
    None,
    PressA,
    PressB,
    PressC,
}

impl ButtonEvent {
    /// The press event for `button`.
    #[inline]
    pub fn press(button: Button) -> Self {
        match button {
            Button::A => ButtonEvent::PressA,
            Button::B => ButtonEvent::PressB,
            Button::C => ButtonEvent::PressC,
        }
    }

    /// Which button was pressed, if any.
    #[inline]
    pub fn button(self) -> Option<Button> {
        match self {
            ButtonEvent::None => None,
            ButtonEvent::PressA => Some(Button::A),
            ButtonEvent::PressB => Some(Button::B),
            ButtonEvent::PressC => Some(Button::C),
        }
    }
}

/// Source of button events for a cooperative polling loop.
///
/// Only one loop should poll a source at a time: whichever code currently owns the loop (the menu,
/// or the action it launched) consumes the events.
pub trait InputSource {
    /// Report at most one new debounced press. Never blocks.
    fn poll(&mut self) -> ButtonEvent;

    /// Raw, undebounced level of `button`.
    fn is_held(&mut self, button: Button) -> bool;

    /// Busy-poll until `event` is reported, discarding everything else.
    fn wait_for(&mut self, event: ButtonEvent) {
        while self.poll() != event {}
    }
}

impl<I: InputSource + ?Sized> InputSource for &mut I {
    #[inline]
    fn poll(&mut self) -> ButtonEvent {
        (**self).poll()
    }

    #[inline]
    fn is_held(&mut self, button: Button) -> bool {
        (**self).is_held(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_button_are_inverse() {
        for b in Button::ALL {
            assert_eq!(ButtonEvent::press(b).button(), Some(b));
        }
        assert_eq!(ButtonEvent::None.button(), None);
    }
}
