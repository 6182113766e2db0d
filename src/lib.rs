// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Zumo Demo Firmware
//!
//! Button-driven demo menu for a small wheeled robot with three push buttons, an 8x2 character
//! LCD and a buzzer, written in Rust, targeting an STM32F767 MCU.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`input`] | Debounced A/B/C button events |
//! | [`menu`] | Cyclic menu that dispatches to demo actions |
//! | [`display`] | Character display interface and an in-memory frame |
//! | [`tone`] | Buzzer music notation and non-blocking playback |
//! | [`hw`] | MCU-level wrappers around GPIO, timers, PWM, USART, etc. |
//! | [`drivers`] | Device-level drivers (HD44780) |
//! | [`screens`] | Startup screens and the shared demo layout |
//! | [`demos`] | Demo routines offered by the menu |
//! | [`clock`], [`config`] | Millisecond time source and tuning constants |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features board --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod config;
pub mod demos;
pub mod display;
pub mod drivers;
pub mod hw;
pub mod input;
pub mod menu;
pub mod screens;
pub mod tone;
