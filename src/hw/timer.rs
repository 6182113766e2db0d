// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! TIM2 as the free-running millisecond clock.
//!
//! TIM2 is 32 bits wide, so with a 1 kHz tick it wraps after about 49 days, exactly like a `u32`
//! millisecond counter should.

use stm32f7xx_hal::{pac, rcc::Clocks};
use thiserror::Error;

use crate::clock::Clock;

const TICK_HZ: u32 = 1_000;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum TimerError {
    #[error("timer clock of {timer_hz} Hz cannot be divided down to {tick_hz} Hz")]
    Prescaler { timer_hz: u32, tick_hz: u32 },
}

/// Input clock of the APB1 timers (TIM2..TIM7, TIM12..TIM14).
///
/// The timers run at twice PCLK1 whenever the APB1 prescaler divides.
pub fn apb1_timer_hz(clocks: &Clocks) -> u32 {
    let pclk1 = clocks.pclk1().raw();
    if pclk1 == clocks.hclk().raw() {
        pclk1
    } else {
        pclk1 * 2
    }
}

/// Prescaler register value that divides `timer_hz` down to `tick_hz`.
pub fn prescaler(timer_hz: u32, tick_hz: u32) -> Result<u16, TimerError> {
    (timer_hz / tick_hz)
        .checked_sub(1)
        .and_then(|p| u16::try_from(p).ok())
        .ok_or(TimerError::Prescaler { timer_hz, tick_hz })
}

/// Handle to the millisecond counter. Copies all read the same timer.
#[derive(Copy, Clone, Debug)]
pub struct MonoTimer {
    _tim2: (),
}

impl MonoTimer {
    /// Start TIM2 counting milliseconds from zero.
    pub fn tim2(tim2: pac::TIM2, clocks: &Clocks) -> Result<Self, TimerError> {
        let psc = prescaler(apb1_timer_hz(clocks), TICK_HZ)?;

        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim2en().set_bit());

        let tim = tim2;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        tim.psc.write(|w| unsafe { w.bits(u32::from(psc)) });

        // Auto-reload: max 32-bit
        tim.arr.write(|w| w.bits(0xFFFF_FFFF));

        // Load the prescaler and reset the counter
        tim.egr.write(|w| w.ug().set_bit());
        tim.cnt.write(|w| w.bits(0));

        tim.cr1.modify(|_, w| w.cen().set_bit());

        Ok(Self { _tim2: () })
    }
}

impl Clock for MonoTimer {
    #[inline]
    fn now_ms(&self) -> u32 {
        // TIM2 was consumed by `tim2`; nothing else touches it after that.
        let tim = unsafe { &*pac::TIM2::ptr() };
        tim.cnt.read().bits()
    }
}
