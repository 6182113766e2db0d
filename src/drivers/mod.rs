// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the raw `hw/` layer and below the
//! application logic.
//!
//! ## Existing drivers
//!
//! - [`hd44780`] – Hitachi HD44780 character LCD, 4-bit parallel bus

pub mod hd44780;

pub use hd44780::Hd44780;
