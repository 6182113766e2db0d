// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F767 robot board.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiod, gpioe, Alternate, Input, Output, PullUp, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub buttons: ButtonPins,
    pub leds: LedPins,
    pub lcd: LcdPins,
    pub buzzer: gpiod::PD12<Alternate<2>>, // TIM4_CH1 (PWM)
    pub usart1: Usart1Pins,
}

/// Push buttons to ground, internal pull-ups.
pub struct ButtonPins {
    pub a: gpioe::PE0<Input<PullUp>>,
    pub b: gpioe::PE1<Input<PullUp>>,
    pub c: gpioe::PE2<Input<PullUp>>,
}

pub struct LedPins {
    pub red: gpiod::PD8<Output<PushPull>>,
    pub yellow: gpiod::PD9<Output<PushPull>>,
    pub green: gpiod::PD10<Output<PushPull>>,
}

/// HD44780 in 4-bit mode, R/W tied low.
pub struct LcdPins {
    pub rs: gpioe::PE7<Output<PushPull>>,
    pub e: gpioe::PE8<Output<PushPull>>,
    pub d4: gpioe::PE9<Output<PushPull>>,
    pub d5: gpioe::PE10<Output<PushPull>>,
    pub d6: gpioe::PE11<Output<PushPull>>,
    pub d7: gpioe::PE12<Output<PushPull>>,
}

pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            buttons: ButtonPins {
                a: gpioe.pe0.into_pull_up_input(),
                b: gpioe.pe1.into_pull_up_input(),
                c: gpioe.pe2.into_pull_up_input(),
            },

            leds: LedPins {
                red: gpiod.pd8.into_push_pull_output(),
                yellow: gpiod.pd9.into_push_pull_output(),
                green: gpiod.pd10.into_push_pull_output(),
            },

            lcd: LcdPins {
                rs: gpioe.pe7.into_push_pull_output(),
                e: gpioe.pe8.into_push_pull_output(),
                d4: gpioe.pe9.into_push_pull_output(),
                d5: gpioe.pe10.into_push_pull_output(),
                d6: gpioe.pe11.into_push_pull_output(),
                d7: gpioe.pe12.into_push_pull_output(),
            },

            buzzer: gpiod.pd12.into_alternate::<2>(),

            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },
        }
    }
}
