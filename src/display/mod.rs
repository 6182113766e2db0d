// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Character Displays
//!
//! The menu and the demo screens only ever clear the screen, move the cursor and print characters,
//! so that is all [`CharDisplay`] asks of a rendering surface.
//!
//! ## Modules
//!
//! - [`frame`] - In-memory surface, used for tests and for inspecting what a screen shows.

pub mod frame;

pub use frame::TextFrame;

/// Character codes from the HD44780 A00 character ROM used by the UI.
pub mod glyph {
    /// Left-pointing arrow.
    pub const LEFT_ARROW: u8 = 0x7F;
    /// Right-pointing arrow.
    pub const RIGHT_ARROW: u8 = 0x7E;
    /// Centered dot.
    pub const CENTER_DOT: u8 = 0xA5;
    /// Shown next to `B` on demo screens to mean "back".
    pub const BACK_ARROW: u8 = LEFT_ARROW;
}

/// A small character-cell display addressed by (column, row).
pub trait CharDisplay {
    /// Number of visible columns.
    const COLUMNS: u8;
    /// Number of visible rows.
    const ROWS: u8;

    /// Blank the screen and move the cursor to (0, 0).
    fn clear(&mut self);

    /// Move the cursor.
    fn goto_xy(&mut self, column: u8, row: u8);

    /// Write one character code at the cursor and advance it.
    fn write_byte(&mut self, byte: u8);

    fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_byte(b);
        }
    }

    /// Print ASCII text at the cursor.
    #[inline]
    fn print(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }
}
