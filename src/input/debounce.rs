// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Single-press debouncer.
//!
//! A press is reported once the raw level has been stable *pressed* for the settle interval, and
//! only after the button was seen stable *released* for the same interval. Chatter on either edge
//! restarts the corresponding wait, and holding the button never repeats the event.

use crate::clock::elapsed_ms;
use crate::config::DEFAULT_SETTLE_MS;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    /// Waiting for the raw level to read released.
    AwaitRelease,
    /// Released since `since`; must stay released for the settle interval.
    SettlingRelease { since: u32 },
    /// Ready to report the next press.
    Armed,
    /// Pressed since `since`; must stay pressed for the settle interval.
    SettlingPress { since: u32 },
}

/// Debounce state of one physical button.
#[derive(Clone, Debug)]
pub struct Debouncer {
    state: State,
    settle_ms: u32,
}

impl Debouncer {
    /// Create a debouncer that starts out waiting for a release.
    ///
    /// A button already held at startup is therefore not reported until it is released and pressed
    /// again.
    pub const fn new(settle_ms: u32) -> Self {
        Self {
            state: State::AwaitRelease,
            settle_ms,
        }
    }

    #[inline]
    pub fn settle_ms(&self) -> u32 {
        self.settle_ms
    }

    /// Change the settle interval. The current phase is kept.
    #[inline]
    pub fn set_settle_ms(&mut self, settle_ms: u32) {
        self.settle_ms = settle_ms;
    }

    /// Feed one raw sample taken at `now_ms`.
    ///
    /// Returns `true` exactly once per debounced press.
    pub fn update(&mut self, pressed: bool, now_ms: u32) -> bool {
        match self.state {
            State::AwaitRelease => {
                if !pressed {
                    self.state = State::SettlingRelease { since: now_ms };
                }
            }
            State::SettlingRelease { since } => {
                if pressed {
                    self.state = State::AwaitRelease;
                } else if elapsed_ms(now_ms, since) >= self.settle_ms {
                    self.state = State::Armed;
                }
            }
            State::Armed => {
                if pressed {
                    self.state = State::SettlingPress { since: now_ms };
                }
            }
            State::SettlingPress { since } => {
                if !pressed {
                    self.state = State::Armed;
                } else if elapsed_ms(now_ms, since) >= self.settle_ms {
                    self.state = State::AwaitRelease;
                    return true;
                }
            }
        }
        false
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_MS)
    }
}
