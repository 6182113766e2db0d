// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! `embedded-hal` 1.0 digital traits for the board's GPIO pins.
//!
//! The drivers in this crate are written against `embedded-hal` 1.0, so each board pin gets a
//! newtype that forwards to the HAL pin's own set/read methods. GPIO access on this MCU cannot
//! fail.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use stm32f7xx_hal::gpio::{gpiod, gpioe, Input, Output, PullUp, PushPull};

macro_rules! output_pins {
    ($($(#[$meta:meta])* $name:ident => $pin:ty,)+) => {$(
        $(#[$meta])*
        pub struct $name(pub $pin);

        impl ErrorType for $name {
            type Error = Infallible;
        }

        impl OutputPin for $name {
            #[inline]
            fn set_low(&mut self) -> Result<(), Infallible> {
                self.0.set_low();
                Ok(())
            }

            #[inline]
            fn set_high(&mut self) -> Result<(), Infallible> {
                self.0.set_high();
                Ok(())
            }
        }
    )+};
}

macro_rules! input_pins {
    ($($(#[$meta:meta])* $name:ident => $pin:ty,)+) => {$(
        $(#[$meta])*
        pub struct $name(pub $pin);

        impl ErrorType for $name {
            type Error = Infallible;
        }

        impl InputPin for $name {
            #[inline]
            fn is_high(&mut self) -> Result<bool, Infallible> {
                Ok(self.0.is_high())
            }

            #[inline]
            fn is_low(&mut self) -> Result<bool, Infallible> {
                Ok(self.0.is_low())
            }
        }
    )+};
}

input_pins! {
    ButtonA => gpioe::PE0<Input<PullUp>>,
    ButtonB => gpioe::PE1<Input<PullUp>>,
    ButtonC => gpioe::PE2<Input<PullUp>>,
}

output_pins! {
    LedRed => gpiod::PD8<Output<PushPull>>,
    LedYellow => gpiod::PD9<Output<PushPull>>,
    LedGreen => gpiod::PD10<Output<PushPull>>,
    /// LCD register select.
    LcdRs => gpioe::PE7<Output<PushPull>>,
    /// LCD enable strobe.
    LcdE => gpioe::PE8<Output<PushPull>>,
    LcdD4 => gpioe::PE9<Output<PushPull>>,
    LcdD5 => gpioe::PE10<Output<PushPull>>,
    LcdD6 => gpioe::PE11<Output<PushPull>>,
    LcdD7 => gpioe::PE12<Output<PushPull>>,
}
