// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Cyclic Menu
//!
//! A fixed list of labelled actions browsed with the three buttons: `A` steps back, `C` steps
//! forward (both wrap around), and `B` runs the selected action. The menu borrows the display it
//! draws on and the input source it polls, and lends both to the action while it runs, so an
//! action can draw its own screen and run its own poll loop.
//!
//! ```text
//! +--------+
//! |LEDs    |   <- label of the selected item
//! |<A .B C>|   <- navigation hint
//! +--------+
//! ```

use log::{debug, info};
use thiserror::Error;

use crate::display::{glyph, CharDisplay};
use crate::input::{ButtonEvent, InputSource};

/// Bottom-row hint: `A` back, `B` select, `C` forward.
pub const NAV_HINT: [u8; 8] = [
    glyph::LEFT_ARROW,
    b'A',
    b' ',
    glyph::CENTER_DOT,
    b'B',
    b' ',
    b'C',
    glyph::RIGHT_ARROW,
];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum MenuError {
    #[error("menu has no items")]
    Empty,
    #[error("label of item {index} is {len} characters wide, display has {columns} columns")]
    LabelTooLong { index: usize, len: usize, columns: u8 },
}

/// Routine run when an item is selected. It receives the menu's display and input source.
pub type Action<'a, D, I> = &'a mut dyn FnMut(&mut D, &mut I);

/// One entry: a label and the action it runs.
pub struct MenuItem<'a, D, I> {
    label: &'a str,
    action: Action<'a, D, I>,
}

impl<'a, D, I> MenuItem<'a, D, I> {
    pub fn new(label: &'a str, action: Action<'a, D, I>) -> Self {
        Self { label, action }
    }

    #[inline]
    pub fn label(&self) -> &'a str {
        self.label
    }
}

/// Menu state: the items, the selected index and the borrowed display and input.
pub struct Menu<'m, 'a, D: CharDisplay, I: InputSource> {
    items: &'m mut [MenuItem<'a, D, I>],
    display: &'m mut D,
    input: &'m mut I,
    index: usize,
}

impl<'m, 'a, D: CharDisplay, I: InputSource> Menu<'m, 'a, D, I> {
    /// Build a menu starting on the first item.
    ///
    /// Fails if `items` is empty or a label is wider than the display.
    pub fn new(
        items: &'m mut [MenuItem<'a, D, I>],
        display: &'m mut D,
        input: &'m mut I,
    ) -> Result<Self, MenuError> {
        if items.is_empty() {
            return Err(MenuError::Empty);
        }
        if let Some((index, item)) = items
            .iter()
            .enumerate()
            .find(|(_, item)| item.label.len() > usize::from(D::COLUMNS))
        {
            return Err(MenuError::LabelTooLong {
                index,
                len: item.label.len(),
                columns: D::COLUMNS,
            });
        }
        Ok(Self {
            items,
            display,
            input,
            index: 0,
        })
    }

    /// Show the selected item, wait for the user to pick one, run it, and return once it does.
    ///
    /// The selection is kept, so the next call starts on the item that just ran.
    pub fn select(&mut self) {
        self.render(self.index);
        loop {
            let event = self.input.poll();
            if let Some(index) = self.handle(event) {
                self.run(index);
                return;
            }
        }
    }

    /// Apply one input event.
    ///
    /// Navigation moves the selection and redraws; `PressB` returns the index to run. Nothing is
    /// run here.
    pub fn handle(&mut self, event: ButtonEvent) -> Option<usize> {
        let len = self.items.len();
        match event {
            ButtonEvent::PressA => {
                self.index = self.index.checked_sub(1).unwrap_or(len - 1);
            }
            ButtonEvent::PressC => {
                self.index = (self.index + 1) % len;
            }
            ButtonEvent::PressB => return Some(self.index),
            ButtonEvent::None => return None,
        }
        debug!("menu at {} ({})", self.index, self.items[self.index].label);
        self.render(self.index);
        None
    }

    /// Draw item `index` and the navigation hint. Out-of-range indices draw nothing.
    pub fn render(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        self.display.clear();
        self.display.print(item.label);
        self.display.goto_xy(0, 1);
        self.display.write_bytes(&NAV_HINT);
    }

    fn run(&mut self, index: usize) {
        let item = &mut self.items[index];
        info!("running {}", item.label);
        (item.action)(&mut *self.display, &mut *self.input);
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; a menu cannot be built without items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&'a str> {
        self.items.get(index).map(MenuItem::label)
    }

    /// The display the menu draws on, for screens shown between selections.
    #[inline]
    pub fn display(&mut self) -> &mut D {
        &mut *self.display
    }
}
