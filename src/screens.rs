// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fixed screens shown by the firmware outside the menu, and the shared "B goes back" layout used
//! by the demos.

use crate::clock::{elapsed_ms, Clock};
use crate::config::{BEEP_BROWNOUT, BEEP_WELCOME};
use crate::display::{glyph, CharDisplay};
use crate::tone::Tone;

/// Clear the screen and put `<-B` at the start of the bottom row, leaving the cursor at (0, 0).
pub fn back_arrow<D: CharDisplay>(display: &mut D) {
    display.clear();
    display.goto_xy(0, 1);
    display.write_bytes(&[glyph::BACK_ARROW, b'B']);
    display.goto_xy(0, 0);
}

pub fn splash<D: CharDisplay>(display: &mut D) {
    display.clear();
    display.print("  Zumo");
    display.goto_xy(2, 1);
    display.print("32U4");
}

pub fn main_menu_title<D: CharDisplay>(display: &mut D) {
    display.clear();
    display.print("  Main");
    display.goto_xy(0, 1);
    display.print("  Menu");
}

/// Greet the user at power-up.
///
/// After a brownout reset a low tone plays and a notice is drawn, which the caller should leave
/// up for a while. Otherwise only the welcome tune plays and the screen is untouched.
pub fn greet<D: CharDisplay, T: Tone>(display: &mut D, tone: &mut T, brownout: bool) {
    if brownout {
        tone.play(BEEP_BROWNOUT);
        display.clear();
        display.print("Brownout");
        display.goto_xy(0, 1);
        display.print(" reset! ");
    } else {
        tone.play(BEEP_WELCOME);
    }
}

/// Keep the current screen up for `ms` while tunes keep playing.
pub fn hold<K: Clock, T: Tone>(clock: &K, tone: &mut T, ms: u32) {
    let start = clock.now_ms();
    while elapsed_ms(clock.now_ms(), start) < ms {
        tone.update();
    }
}
