// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Hardware Layer
//!
//! MCU-level wrappers. Everything that touches STM32F7 registers is only built with the `board`
//! feature; the LED wrappers and the reset-flag decoding are plain `embedded-hal` code and always
//! available.

pub mod led;
pub mod reset;

#[cfg(feature = "board")]
pub mod delay;
#[cfg(feature = "board")]
pub mod gpio;
#[cfg(feature = "board")]
pub mod pins;
#[cfg(feature = "board")]
pub mod pwm;
#[cfg(feature = "board")]
pub mod timer;
#[cfg(feature = "board")]
pub mod usart;

pub use led::{ActiveLevel, Led, LedColor, StatusLeds};
pub use reset::ResetCause;

#[cfg(feature = "board")]
pub use delay::AsmDelay;
#[cfg(feature = "board")]
pub use pwm::PwmTone;
#[cfg(feature = "board")]
pub use timer::{MonoTimer, TimerError};
#[cfg(feature = "board")]
pub use usart::Usart;
