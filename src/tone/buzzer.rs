// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Non-blocking note sequencer.

use log::{trace, warn};

use super::{Melody, Note, Tone, ToneOutput};
use crate::clock::{elapsed_ms, Clock};

#[derive(Copy, Clone, Debug)]
struct Playing {
    note: Note,
    started_ms: u32,
    sounding: bool,
}

/// Plays tunes on a [`ToneOutput`], one note at a time, as [`Tone::update`] is called.
pub struct Buzzer<O: ToneOutput, K: Clock> {
    output: O,
    clock: K,
    melody: Option<Melody<'static>>,
    current: Option<Playing>,
}

impl<O: ToneOutput, K: Clock> Buzzer<O, K> {
    pub fn new(output: O, clock: K) -> Self {
        Self {
            output,
            clock,
            melody: None,
            current: None,
        }
    }

    /// Release the output and clock.
    pub fn free(self) -> (O, K) {
        (self.output, self.clock)
    }

    fn halt(&mut self) {
        self.output.stop();
        self.melody = None;
        self.current = None;
    }

    /// Start the next note of the melody at `now`, or finish.
    fn advance(&mut self, now: u32) {
        let next = match self.melody.as_mut() {
            Some(melody) => melody.next(),
            None => None,
        };
        match next {
            Some(Ok(note)) => {
                match note.frequency_hz {
                    Some(hz) => self.output.start(hz, note.volume),
                    None => self.output.stop(),
                }
                trace!("note {:?}", note);
                self.current = Some(Playing {
                    note,
                    started_ms: now,
                    sounding: note.frequency_hz.is_some(),
                });
            }
            Some(Err(e)) => {
                warn!("tune aborted: {}", e);
                self.halt();
            }
            None => self.halt(),
        }
    }
}

impl<O: ToneOutput, K: Clock> Tone for Buzzer<O, K> {
    fn play(&mut self, tune: &'static str) {
        self.melody = Some(Melody::new(tune));
        let now = self.clock.now_ms();
        self.advance(now);
    }

    fn stop(&mut self) {
        self.halt();
    }

    #[inline]
    fn is_playing(&self) -> bool {
        self.current.is_some()
    }

    fn update(&mut self) {
        let Some(playing) = self.current.as_mut() else {
            return;
        };
        let now = self.clock.now_ms();
        let elapsed = elapsed_ms(now, playing.started_ms);
        if elapsed >= playing.note.duration_ms {
            self.advance(now);
        } else if playing.sounding && elapsed >= playing.note.sound_ms {
            playing.sounding = false;
            self.output.stop();
        }
    }
}
