// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time configuration for the demo firmware.
//!
//! Timing constants are tuning parameters, not behavioral contracts. Tunes use the buzzer
//! notation parsed by [`crate::tone::Melody`].

use log::LevelFilter;

/// Time a raw button level must stay stable before it counts, in milliseconds.
pub const DEFAULT_SETTLE_MS: u32 = 15;

/// Character LCD geometry.
pub const LCD_COLUMNS: u8 = 8;
pub const LCD_ROWS: u8 = 2;

/// Verbosity of the USART debug log.
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

// Button feedback beeps
pub const BEEP_BUTTON_A: &str = "!c32";
pub const BEEP_BUTTON_B: &str = "!e32";
pub const BEEP_BUTTON_C: &str = "!g32";

// Startup tunes
pub const BEEP_BROWNOUT: &str = "<c8";
pub const BEEP_WELCOME: &str = ">g32>>c32";

/// How long each startup screen stays up.
pub const SCREEN_HOLD_MS: u32 = 1_000;

/// LED demo step period.
pub const LED_PERIOD_MS: u32 = 500;

/// Played as the LED demo lights red, green and yellow.
pub const LED_TONES: [&str; 3] = ["c32", "e32", "g32"];

/// Music demo title scroll period.
pub const TITLE_SCROLL_MS: u32 = 250;

/// Fugue in D minor, J.S. Bach.
pub const FUGUE: &str = concat!(
    "! V10T120O5L16agafaea dac+adaea fa<aa<bac#a dac#adaea f",
    "O6dcd<b-d<ad<g d<f+d<gd<ad<b- d<dd<ed<f+d<g d<f+d<gd<ad",
    "L8MS<b-d<b-d MLe-<ge-<g MSc<ac<a MLd<fd<f O5MSb-gb-g",
    "ML>c#e>c#e MS afaf ML gc#gc# MS fdfd ML e<b-e<b-",
    "O6L16ragafaea dac#adaea fa<aa<bac#a dac#adaea faeadaca",
    "<b-acadg<b-g egdgcg<b-g <ag<b-gcf<af dfcf<b-f<af",
    "<gf<af<b-e<ge c#e<b-e<ae<ge <fe<ge<ad<fd",
    "O5e>ee>ef>df>d b->c#b->c#a>df>d e>ee>ef>df>d",
    "e>d>c#>db>d>c#b >c#agaegfe fO6dc#dfdc#<b c#4",
);

/// Scrolled across the top row while the fugue plays. Padded so it enters and leaves the screen.
pub const FUGUE_TITLE: &str = "       Fugue in D Minor - by J.S. Bach       ";
