// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Buzzer drive: TIM4 channel 1 as a square-wave generator on PD12.
//!
//! The timer ticks at 1 MHz. Each note sets the period to one cycle of the pitch and the compare
//! value to a fraction of it, from silent at volume 0 to a 50% square wave at full volume.

use stm32f7xx_hal::{
    gpio::{gpiod, Alternate},
    pac,
    rcc::Clocks,
};

use super::timer::{apb1_timer_hz, prescaler, TimerError};
use crate::tone::ToneOutput;

const TICK_HZ: u32 = 1_000_000;
const MAX_VOLUME: u32 = 15;

pub struct PwmTone {
    tim: pac::TIM4,
    pin: gpiod::PD12<Alternate<2>>,
}

impl PwmTone {
    /// Configure TIM4 CH1 for PWM output, initially silent.
    pub fn tim4(
        tim4: pac::TIM4,
        pin: gpiod::PD12<Alternate<2>>,
        clocks: &Clocks,
    ) -> Result<Self, TimerError> {
        let psc = prescaler(apb1_timer_hz(clocks), TICK_HZ)?;

        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim4en().set_bit());

        let tim = tim4;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        tim.psc.write(|w| unsafe { w.bits(u32::from(psc)) });

        // CH1: PWM mode 1, preloaded compare
        tim.ccmr1_output()
            .modify(|_, w| w.oc1m().pwm_mode1().oc1pe().enabled());
        tim.ccr1.write(|w| unsafe { w.bits(0) });
        tim.ccer.modify(|_, w| w.cc1p().clear_bit().cc1e().set_bit());

        // Buffered auto-reload so period changes land on an update event
        tim.cr1.modify(|_, w| w.arpe().set_bit());

        Ok(Self { tim, pin })
    }

    pub fn free(self) -> (pac::TIM4, gpiod::PD12<Alternate<2>>) {
        (self.tim, self.pin)
    }
}

impl ToneOutput for PwmTone {
    fn start(&mut self, frequency_hz: u32, volume: u8) {
        if frequency_hz == 0 || volume == 0 {
            self.stop();
            return;
        }
        let period = (TICK_HZ / frequency_hz).clamp(2, 0x1_0000);
        let duty = period * u32::from(volume).min(MAX_VOLUME) / (2 * MAX_VOLUME);

        self.tim.arr.write(|w| unsafe { w.bits(period - 1) });
        self.tim.ccr1.write(|w| unsafe { w.bits(duty) });
        self.tim.egr.write(|w| w.ug().set_bit());
        self.tim.cr1.modify(|_, w| w.cen().set_bit());
    }

    fn stop(&mut self) {
        self.tim.cr1.modify(|_, w| w.cen().clear_bit());
        self.tim.ccr1.write(|w| unsafe { w.bits(0) });
        self.tim.egr.write(|w| w.ug().set_bit());
    }
}
