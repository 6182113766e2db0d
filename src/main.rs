// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Robot board firmware: startup screens, then the demo menu forever.

#![no_main]
#![no_std]

use core::cell::RefCell;

use cortex_m_rt::entry;
use log::{error, info};
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use zumo_demo::config::{LOG_LEVEL, SCREEN_HOLD_MS};
use zumo_demo::demos;
use zumo_demo::drivers::Hd44780;
use zumo_demo::hw::gpio::{
    ButtonA, ButtonB, ButtonC, LcdD4, LcdD5, LcdD6, LcdD7, LcdE, LcdRs, LedGreen, LedRed,
    LedYellow,
};
use zumo_demo::hw::pins::BoardPins;
use zumo_demo::hw::{usart, AsmDelay, Led, MonoTimer, PwmTone, ResetCause, StatusLeds, Usart};
use zumo_demo::input::{Buttons, PushButton};
use zumo_demo::menu::{Menu, MenuItem};
use zumo_demo::screens;
use zumo_demo::tone::Buzzer;

type Lcd = Hd44780<LcdRs, LcdE, LcdD4, LcdD5, LcdD6, LcdD7, AsmDelay>;
type BoardBuzzer = Buzzer<PwmTone, MonoTimer>;
type Panel = Buttons<ButtonA, ButtonB, ButtonC, MonoTimer, &'static RefCell<BoardBuzzer>>;
type Item<'a> = MenuItem<'a, Lcd, Panel>;

/// Park the CPU after a fatal bring-up error.
fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}

#[entry]
fn main() -> ! {
    // Read before anything else can reset the flags
    let cause = ResetCause::take();

    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);

    // USART1 (DBG)
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART1,
        (pins.usart1.tx, pins.usart1.rx),
        &clocks,
        usart_cfg,
    );
    usart::init_logger(Usart::new(serial), LOG_LEVEL).ok();
    info!("reset cause: {:?}", cause);

    // TIM2 (ms clock), TIM4 (buzzer)
    let clock = match MonoTimer::tim2(dp.TIM2, &clocks) {
        Ok(clock) => clock,
        Err(e) => {
            error!("clock: {}", e);
            halt();
        }
    };
    let pwm = match PwmTone::tim4(dp.TIM4, pins.buzzer, &clocks) {
        Ok(pwm) => pwm,
        Err(e) => {
            error!("buzzer: {}", e);
            halt();
        }
    };
    let Some(buzzer) = cortex_m::singleton!(: RefCell<BoardBuzzer> =
        RefCell::new(Buzzer::new(pwm, clock)))
    else {
        halt();
    };
    let buzzer: &'static RefCell<BoardBuzzer> = buzzer;

    // LCD
    let lcd_pins = pins.lcd;
    let mut lcd: Lcd = Hd44780::new(
        LcdRs(lcd_pins.rs),
        LcdE(lcd_pins.e),
        LcdD4(lcd_pins.d4),
        LcdD5(lcd_pins.d5),
        LcdD6(lcd_pins.d6),
        LcdD7(lcd_pins.d7),
        AsmDelay::new(&clocks),
    );

    // LEDs
    let mut leds = StatusLeds::new(
        Led::active_low(LedRed(pins.leds.red)),
        Led::active_low(LedGreen(pins.leds.green)),
        Led::active_low(LedYellow(pins.leds.yellow)),
    );

    // Buttons
    let mut panel: Panel = Buttons::new(
        PushButton::active_low(ButtonA(pins.buttons.a)),
        PushButton::active_low(ButtonB(pins.buttons.b)),
        PushButton::active_low(ButtonC(pins.buttons.c)),
        clock,
        buzzer,
    );

    // Startup screens
    let mut tone = buzzer;
    let brownout = cause == ResetCause::Brownout;
    screens::greet(&mut lcd, &mut tone, brownout);
    if brownout {
        screens::hold(&clock, &mut tone, SCREEN_HOLD_MS);
    }
    screens::splash(&mut lcd);
    screens::hold(&clock, &mut tone, SCREEN_HOLD_MS);

    // Main menu
    let mut led_demo = |lcd: &mut Lcd, panel: &mut Panel| {
        let mut tone = buzzer;
        demos::leds(lcd, panel, &clock, &mut tone, &mut leds);
    };
    let mut button_demo = |lcd: &mut Lcd, panel: &mut Panel| demos::buttons(lcd, panel);
    let mut music_demo = |lcd: &mut Lcd, panel: &mut Panel| {
        let mut tone = buzzer;
        demos::music(lcd, panel, &clock, &mut tone);
    };
    let mut items = [
        Item::new("LEDs", &mut led_demo),
        Item::new("Buttons", &mut button_demo),
        Item::new("Music", &mut music_demo),
    ];
    let mut menu = match Menu::new(&mut items, &mut lcd, &mut panel) {
        Ok(menu) => menu,
        Err(e) => {
            error!("menu: {}", e);
            halt();
        }
    };

    info!("entering main menu");
    loop {
        screens::main_menu_title(menu.display());
        screens::hold(&clock, &mut tone, SCREEN_HOLD_MS);
        menu.select();
    }
}
