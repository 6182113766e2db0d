// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! HD44780 character LCD over a 4-bit parallel bus.
//!
//! The R/W line is assumed tied to ground, so the busy flag is never read and every command is
//! followed by a worst-case execution delay instead. Writes to the panel cannot fail from the
//! driver's point of view; pin errors are dropped.

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::config::{LCD_COLUMNS, LCD_ROWS};
use crate::display::CharDisplay;

// Instruction set
pub mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const ENTRY_MODE: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    /// `ENTRY_MODE`: move the cursor right after each write.
    pub const INCREMENT: u8 = 0x02;
    /// `DISPLAY_CONTROL`: panel on, cursor and blink off.
    pub const DISPLAY_ON: u8 = 0x04;
    /// `FUNCTION_SET`: two display lines, 5x8 font, 4-bit bus.
    pub const TWO_LINES: u8 = 0x08;
}

/// DDRAM address of the first column of each row.
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

// Execution times, with margin.
const POWER_ON_US: u32 = 50_000;
const WAKE_US: u32 = 5_000;
const WAKE_SHORT_US: u32 = 150;
const COMMAND_US: u32 = 50;
const CLEAR_US: u32 = 2_000;
const ENABLE_PULSE_NS: u32 = 500;

/// HD44780 (or compatible) LCD wired with RS, E and D4..D7.
pub struct Hd44780<RS, E, D4, D5, D6, D7, DL> {
    rs: RS,
    e: E,
    d4: D4,
    d5: D5,
    d6: D6,
    d7: D7,
    delay: DL,
}

impl<RS, E, D4, D5, D6, D7, DL> Hd44780<RS, E, D4, D5, D6, D7, DL>
where
    RS: OutputPin,
    E: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DL: DelayNs,
{
    /// Take the bus pins and run the 4-bit initialization sequence.
    pub fn new(rs: RS, e: E, d4: D4, d5: D5, d6: D6, d7: D7, delay: DL) -> Self {
        let mut lcd = Self {
            rs,
            e,
            d4,
            d5,
            d6,
            d7,
            delay,
        };
        lcd.init();
        lcd
    }

    /// Reset the controller into 4-bit, two-line mode with a blank screen.
    ///
    /// The controller may be in 8-bit mode or halfway through a 4-bit transfer, so it is first
    /// forced into 8-bit mode with three `0x3` nibbles and then switched to 4-bit.
    pub fn init(&mut self) {
        self.e.set_low().ok();
        self.rs.set_low().ok();
        self.delay.delay_us(POWER_ON_US);

        self.write_nibble(0x3);
        self.delay.delay_us(WAKE_US);
        self.write_nibble(0x3);
        self.delay.delay_us(WAKE_SHORT_US);
        self.write_nibble(0x3);
        self.delay.delay_us(WAKE_SHORT_US);
        self.write_nibble(0x2);
        self.delay.delay_us(COMMAND_US);

        self.command(cmd::FUNCTION_SET | cmd::TWO_LINES);
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON);
        self.clear();
        self.command(cmd::ENTRY_MODE | cmd::INCREMENT);
    }

    #[inline]
    pub fn command(&mut self, byte: u8) {
        self.send(byte, false);
    }

    /// Release the pins and delay.
    pub fn free(self) -> (RS, E, D4, D5, D6, D7, DL) {
        (self.rs, self.e, self.d4, self.d5, self.d6, self.d7, self.delay)
    }

    fn send(&mut self, byte: u8, data: bool) {
        self.rs.set_state(data.into()).ok();
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
        self.delay.delay_us(COMMAND_US);
    }

    /// Put a nibble on D4..D7 and latch it with a pulse on E.
    fn write_nibble(&mut self, nibble: u8) {
        self.d4.set_state((nibble & 0x1 != 0).into()).ok();
        self.d5.set_state((nibble & 0x2 != 0).into()).ok();
        self.d6.set_state((nibble & 0x4 != 0).into()).ok();
        self.d7.set_state((nibble & 0x8 != 0).into()).ok();

        self.e.set_high().ok();
        self.delay.delay_ns(ENABLE_PULSE_NS);
        self.e.set_low().ok();
        self.delay.delay_ns(ENABLE_PULSE_NS);
    }
}

impl<RS, E, D4, D5, D6, D7, DL> CharDisplay for Hd44780<RS, E, D4, D5, D6, D7, DL>
where
    RS: OutputPin,
    E: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DL: DelayNs,
{
    const COLUMNS: u8 = LCD_COLUMNS;
    const ROWS: u8 = LCD_ROWS;

    fn clear(&mut self) {
        self.send(cmd::CLEAR, false);
        self.delay.delay_us(CLEAR_US);
    }

    fn goto_xy(&mut self, column: u8, row: u8) {
        let offset = ROW_OFFSETS[usize::from(row) % ROW_OFFSETS.len()];
        self.command(cmd::SET_DDRAM_ADDR | (offset.wrapping_add(column) & 0x7F));
    }

    #[inline]
    fn write_byte(&mut self, byte: u8) {
        self.send(byte, true);
    }
}

impl<RS, E, D4, D5, D6, D7, DL> core::fmt::Write for Hd44780<RS, E, D4, D5, D6, D7, DL>
where
    RS: OutputPin,
    E: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DL: DelayNs,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.print(s);
        Ok(())
    }
}
