// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! In-memory character display.
//!
//! Mirrors what an HD44780 would show: characters written past the last visible column are
//! dropped, and `clear` fills the grid with spaces.

use core::fmt;

use super::CharDisplay;

/// A `W` × `H` grid of character codes with a write cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextFrame<const W: usize, const H: usize> {
    cells: [[u8; W]; H],
    column: usize,
    row: usize,
}

impl<const W: usize, const H: usize> TextFrame<W, H> {
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; W]; H],
            column: 0,
            row: 0,
        }
    }

    /// Character codes of one row, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[u8; W]> {
        self.cells.get(row)
    }

    /// Cursor position as (column, row).
    #[inline]
    pub fn cursor(&self) -> (usize, usize) {
        (self.column, self.row)
    }
}

impl<const W: usize, const H: usize> Default for TextFrame<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> CharDisplay for TextFrame<W, H> {
    const COLUMNS: u8 = W as u8;
    const ROWS: u8 = H as u8;

    fn clear(&mut self) {
        self.cells = [[b' '; W]; H];
        self.column = 0;
        self.row = 0;
    }

    fn goto_xy(&mut self, column: u8, row: u8) {
        self.column = column as usize;
        self.row = row as usize;
    }

    fn write_byte(&mut self, byte: u8) {
        if let Some(cell) = self
            .cells
            .get_mut(self.row)
            .and_then(|r| r.get_mut(self.column))
        {
            *cell = byte;
        }
        self.column = self.column.saturating_add(1);
    }
}

impl<const W: usize, const H: usize> fmt::Write for TextFrame<W, H> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn print_writes_at_cursor_and_clips() {
        let mut frame = TextFrame::<8, 2>::new();
        frame.print("LineSensors");
        frame.goto_xy(6, 1);
        frame.print("C*");

        assert_eq!(frame.row(0), Some(b"LineSens"));
        assert_eq!(frame.row(1), Some(b"      C*"));
    }

    #[test]
    fn clear_blanks_and_homes() {
        let mut frame = TextFrame::<8, 2>::new();
        frame.goto_xy(3, 1);
        frame.print("xy");
        frame.clear();

        assert_eq!(frame.cursor(), (0, 0));
        assert_eq!(frame.row(1), Some(b"        "));
    }

    #[test]
    fn writes_past_last_row_are_dropped() {
        let mut frame = TextFrame::<8, 2>::new();
        frame.goto_xy(0, 5);
        write!(frame, "{:03}", 42).unwrap();

        assert_eq!(frame, {
            let mut blank = TextFrame::<8, 2>::new();
            blank.goto_xy(3, 5);
            blank
        });
    }
}
