// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Buzzer Tones
//!
//! Tunes are written in a compact text notation (`"!c32"`, `">g32>>c32"`) and played without
//! blocking: `play` starts a tune and returns, and `update` must be called from the cooperative
//! loop to move on to the next note. [`crate::input::Buttons`] does that on every poll.
//!
//! ## Modules
//!
//! - [`melody`] - Notation parser producing [`Note`]s.
//! - [`buzzer`] - Non-blocking note sequencer over a [`ToneOutput`].

pub mod buzzer;
pub mod melody;

pub use buzzer::Buzzer;
pub use melody::{Melody, MelodyError, Note};

use core::cell::RefCell;

/// Fire-and-forget tune playback.
pub trait Tone {
    /// Start playing `tune`, replacing whatever is playing.
    fn play(&mut self, tune: &'static str);

    /// Silence the buzzer and drop the rest of the tune.
    fn stop(&mut self);

    fn is_playing(&self) -> bool;

    /// Advance the tune. Call often; never blocks.
    fn update(&mut self);
}

/// Hardware that can sound a single square-wave pitch.
pub trait ToneOutput {
    /// Sound `frequency_hz` at `volume` (0 to 15) until stopped or changed.
    fn start(&mut self, frequency_hz: u32, volume: u8);

    fn stop(&mut self);
}

/// Lets the input panel and the running demo share one buzzer.
///
/// Borrows are short and never overlap in the single-threaded loop.
impl<T: Tone> Tone for &RefCell<T> {
    fn play(&mut self, tune: &'static str) {
        self.borrow_mut().play(tune);
    }

    fn stop(&mut self) {
        self.borrow_mut().stop();
    }

    fn is_playing(&self) -> bool {
        self.borrow().is_playing()
    }

    fn update(&mut self) {
        self.borrow_mut().update();
    }
}

/// No buzzer fitted.
impl Tone for () {
    fn play(&mut self, _tune: &'static str) {}

    fn stop(&mut self) {}

    fn is_playing(&self) -> bool {
        false
    }

    fn update(&mut self) {}
}
