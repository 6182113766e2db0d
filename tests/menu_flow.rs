// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Menu selection flows driven by scripted and simulated button input.

use std::cell::Cell;
use std::collections::VecDeque;
use std::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};
use zumo_demo::clock::Clock;
use zumo_demo::display::{CharDisplay, TextFrame};
use zumo_demo::input::{Button, ButtonEvent, Buttons, InputSource, PushButton};
use zumo_demo::menu::{Menu, MenuItem};

type Frame = TextFrame<8, 2>;

/// Replays a fixed event list, then reports `None` forever.
#[derive(Default)]
struct Script {
    events: VecDeque<ButtonEvent>,
    polls: usize,
}

impl Script {
    fn new(events: &[ButtonEvent]) -> Self {
        Self {
            events: events.iter().copied().collect(),
            polls: 0,
        }
    }
}

impl InputSource for Script {
    fn poll(&mut self) -> ButtonEvent {
        self.polls += 1;
        self.events.pop_front().unwrap_or_default()
    }

    fn is_held(&mut self, _button: Button) -> bool {
        false
    }
}

fn counter<D, I>(count: &Cell<u32>) -> impl FnMut(&mut D, &mut I) + '_ {
    move |_: &mut D, _: &mut I| count.set(count.get() + 1)
}

#[test]
fn confirm_runs_only_the_selected_action() {
    use ButtonEvent::*;

    let runs = [Cell::new(0), Cell::new(0), Cell::new(0)];
    let mut act0 = counter::<Frame, Script>(&runs[0]);
    let mut act1 = counter::<Frame, Script>(&runs[1]);
    let mut act2 = counter::<Frame, Script>(&runs[2]);
    let mut items: [MenuItem<Frame, Script>; 3] = [
        MenuItem::new("Encoders", &mut act0),
        MenuItem::new("LEDs", &mut act1),
        MenuItem::new("LineSens", &mut act2),
    ];

    let mut frame = Frame::new();
    let mut input = Script::new(&[PressC, PressC, PressB]);
    let mut menu = Menu::new(&mut items, &mut frame, &mut input).unwrap();
    menu.select();
    assert_eq!(menu.current_index(), 2);
    drop(menu);

    assert_eq!(input.polls, 3);
    assert_eq!(
        [runs[0].get(), runs[1].get(), runs[2].get()],
        [0, 0, 1]
    );
}

#[test]
fn navigation_alone_never_returns() {
    use ButtonEvent::*;

    let runs = Cell::new(0);
    let mut act = counter::<Frame, Script>(&runs);
    let mut other = counter::<Frame, Script>(&runs);
    let mut items: [MenuItem<Frame, Script>; 2] = [
        MenuItem::new("one", &mut act),
        MenuItem::new("two", &mut other),
    ];

    // Long stretch of navigation and idle polls before the confirm.
    let mut events = Vec::new();
    for i in 0..500 {
        events.push(match i % 3 {
            0 => PressA,
            1 => PressC,
            _ => None,
        });
    }
    events.push(PressB);

    let mut frame = Frame::new();
    let mut input = Script::new(&events);
    Menu::new(&mut items, &mut frame, &mut input)
        .unwrap()
        .select();

    assert_eq!(input.polls, events.len());
    assert_eq!(runs.get(), 1);
}

#[test]
fn action_owns_the_poll_loop_until_it_returns() {
    use ButtonEvent::*;

    let mut demo = |display: &mut Frame, input: &mut Script| {
        display.clear();
        display.print("demo");
        // Presses meant for the demo must not move the menu.
        input.wait_for(PressB);
    };
    let mut idle = |_: &mut Frame, _: &mut Script| {};
    let mut items: [MenuItem<Frame, Script>; 2] = [
        MenuItem::new("Demo", &mut demo),
        MenuItem::new("Idle", &mut idle),
    ];

    let mut frame = Frame::new();
    let mut input = Script::new(&[PressB, PressC, PressA, PressC, PressB, PressC]);
    let mut menu = Menu::new(&mut items, &mut frame, &mut input).unwrap();
    menu.select();

    assert_eq!(menu.current_index(), 0);
    assert_eq!(menu.display().row(0), Some(b"demo    "));
    drop(menu);
    // The trailing PressC was never consumed.
    assert_eq!(input.polls, 5);
}

/// Millisecond clock that ticks once per read, so every poll is one millisecond apart.
struct TickingClock(Cell<u32>);

impl Clock for TickingClock {
    fn now_ms(&self) -> u32 {
        let now = self.0.get();
        self.0.set(now + 1);
        now
    }
}

/// Active-low button pin pressed during the given `[start, end)` millisecond windows.
struct TimedPin<'a> {
    clock: &'a TickingClock,
    pressed: &'a [(u32, u32)],
}

impl TimedPin<'_> {
    fn level_high(&self) -> bool {
        let now = self.clock.0.get();
        !self
            .pressed
            .iter()
            .any(|&(start, end)| (start..end).contains(&now))
    }
}

impl ErrorType for TimedPin<'_> {
    type Error = Infallible;
}

impl InputPin for TimedPin<'_> {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.level_high())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.level_high())
    }
}

type Panel<'a> = Buttons<TimedPin<'a>, TimedPin<'a>, TimedPin<'a>, &'a TickingClock, ()>;

#[test]
fn physical_buttons_drive_the_menu() {
    let clock = TickingClock(Cell::new(0));
    let pin = |pressed: &'static [(u32, u32)]| TimedPin {
        clock: &clock,
        pressed,
    };
    let mut buttons = Buttons::new(
        PushButton::active_low(pin(&[])),
        PushButton::active_low(pin(&[(300, 400)])),
        PushButton::active_low(pin(&[(100, 150), (200, 260)])),
        &clock,
        (),
    );

    let runs = [Cell::new(0), Cell::new(0), Cell::new(0)];
    let mut act0 = counter::<Frame, Panel>(&runs[0]);
    let mut act1 = counter::<Frame, Panel>(&runs[1]);
    let mut act2 = counter::<Frame, Panel>(&runs[2]);
    let mut items: [MenuItem<Frame, Panel>; 3] = [
        MenuItem::new("Encoders", &mut act0),
        MenuItem::new("LEDs", &mut act1),
        MenuItem::new("LineSens", &mut act2),
    ];

    let mut frame = Frame::new();
    let mut menu = Menu::new(&mut items, &mut frame, &mut buttons).unwrap();
    menu.select();

    assert_eq!(menu.current_index(), 2);
    drop(menu);
    assert_eq!(
        [runs[0].get(), runs[1].get(), runs[2].get()],
        [0, 0, 1]
    );
    // Returned right after the B press settled, well before the button was released.
    assert!(clock.0.get() < 400);
}
