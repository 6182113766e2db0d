// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Parser for the buzzer's music notation.
//!
//! | Token | Meaning |
//! | ----- | ------- |
//! | `a`..`g` | Note, optionally followed by `+`/`#` (sharp) or `-` (flat), a length and dots |
//! | `r` | Rest, optionally followed by a length and dots |
//! | `o<n>` | Octave, 0 to 8 (default 4) |
//! | `t<n>` | Tempo in quarter notes per minute (default 120) |
//! | `l<n>` | Default note length: 1 = whole, 4 = quarter, ... (default 4) |
//! | `v<n>` | Volume, 0 to 15 (default 15) |
//! | `ms` / `ml` | Staccato / legato |
//! | `>` / `<` | Next note one octave up / down; repeatable |
//! | `!` | Reset octave, tempo, length, volume and articulation to defaults |
//!
//! Letters are case-insensitive and whitespace is ignored. Pitches are equal-tempered with
//! A4 = 440 Hz.

use thiserror::Error;

const DEFAULT_OCTAVE: u32 = 4;
const DEFAULT_TEMPO: u32 = 120;
const DEFAULT_LENGTH: u32 = 4;
const MAX_VOLUME: u8 = 15;
const MAX_OCTAVE: i32 = 8;

/// Whole-note duration at a tempo of one quarter note per minute.
const WHOLE_NOTE_MS_AT_1_BPM: u32 = 240_000;

/// Octave 4 (C4 to B4) in hundredths of a hertz.
const OCTAVE_4_CENTI_HZ: [u32; 12] = [
    26_163, 27_718, 29_366, 31_113, 32_963, 34_923, 36_999, 39_200, 41_530, 44_000, 46_616, 49_388,
];

/// One parsed note or rest.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Note {
    /// `None` for rests and silent (volume 0) notes.
    pub frequency_hz: Option<u32>,
    /// Time until the next note starts.
    pub duration_ms: u32,
    /// Time the buzzer actually sounds; shorter than `duration_ms` when staccato.
    pub sound_ms: u32,
    pub volume: u8,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum MelodyError {
    #[error("unexpected {found:?} at offset {position}")]
    UnexpectedChar { position: usize, found: char },
    #[error("tune ends inside a command at offset {position}")]
    UnexpectedEnd { position: usize },
    #[error("'{command}' at offset {position} needs a number")]
    MissingNumber { position: usize, command: char },
    #[error("'{command}' at offset {position} must not be zero")]
    Zero { position: usize, command: char },
    #[error("note at offset {position} is outside octaves 0 to 8")]
    OutOfRange { position: usize },
}

/// Iterator over the notes of a tune.
///
/// Yields at most one error, after which iteration ends.
#[derive(Clone, Debug)]
pub struct Melody<'a> {
    src: &'a [u8],
    pos: usize,
    octave: u32,
    tempo: u32,
    length: u32,
    volume: u8,
    staccato: bool,
    done: bool,
}

impl<'a> Melody<'a> {
    pub fn new(tune: &'a str) -> Self {
        Self {
            src: tune.as_bytes(),
            pos: 0,
            octave: DEFAULT_OCTAVE,
            tempo: DEFAULT_TEMPO,
            length: DEFAULT_LENGTH,
            volume: MAX_VOLUME,
            staccato: false,
            done: false,
        }
    }

    fn reset(&mut self) {
        self.octave = DEFAULT_OCTAVE;
        self.tempo = DEFAULT_TEMPO;
        self.length = DEFAULT_LENGTH;
        self.volume = MAX_VOLUME;
        self.staccato = false;
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).map(u8::to_ascii_lowercase)
    }

    #[inline]
    fn bump(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Consume a run of decimal digits, if any.
    fn number(&mut self) -> Option<u32> {
        let mut value: Option<u32> = None;
        while let Some(c @ b'0'..=b'9') = self.peek() {
            self.pos += 1;
            let digit = u32::from(c - b'0');
            value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit));
        }
        value
    }

    fn required(&mut self, command: char, position: usize) -> Result<u32, MelodyError> {
        self.number()
            .ok_or(MelodyError::MissingNumber { position, command })
    }

    fn non_zero(&mut self, command: char, position: usize) -> Result<u32, MelodyError> {
        match self.required(command, position)? {
            0 => Err(MelodyError::Zero { position, command }),
            n => Ok(n),
        }
    }

    fn next_note(&mut self) -> Result<Option<Note>, MelodyError> {
        let mut shift: i32 = 0;
        loop {
            let position = self.pos;
            let Some(c) = self.bump() else {
                return Ok(None);
            };
            match c {
                b' ' | b'\t' | b'\r' | b'\n' => {}
                b'!' => self.reset(),
                b'o' => {
                    let octave = self.required('o', position)?;
                    if octave > MAX_OCTAVE as u32 {
                        return Err(MelodyError::OutOfRange { position });
                    }
                    self.octave = octave;
                }
                b't' => self.tempo = self.non_zero('t', position)?,
                b'l' => self.length = self.non_zero('l', position)?,
                b'v' => {
                    let volume = self.required('v', position)?;
                    self.volume = volume.min(u32::from(MAX_VOLUME)) as u8;
                }
                b'm' => match self.bump() {
                    Some(b's') => self.staccato = true,
                    Some(b'l') => self.staccato = false,
                    Some(other) => {
                        return Err(MelodyError::UnexpectedChar {
                            position: position + 1,
                            found: other as char,
                        })
                    }
                    None => return Err(MelodyError::UnexpectedEnd { position }),
                },
                b'>' => shift += 1,
                b'<' => shift -= 1,
                b'r' => return self.finish(None, position).map(Some),
                b'a'..=b'g' => {
                    let semitone = match c {
                        b'c' => 0,
                        b'd' => 2,
                        b'e' => 4,
                        b'f' => 5,
                        b'g' => 7,
                        b'a' => 9,
                        _ => 11,
                    };
                    return self.finish(Some((semitone, shift)), position).map(Some);
                }
                other => {
                    return Err(MelodyError::UnexpectedChar {
                        position,
                        found: other as char,
                    })
                }
            }
        }
    }

    /// Parse accidentals, length and dots following a note letter (or rest) and build the note.
    fn finish(&mut self, pitch: Option<(i32, i32)>, position: usize) -> Result<Note, MelodyError> {
        let frequency_hz = match pitch {
            Some((mut semitone, shift)) => {
                while let Some(c) = self.peek() {
                    match c {
                        b'+' | b'#' => semitone += 1,
                        b'-' => semitone -= 1,
                        _ => break,
                    }
                    self.pos += 1;
                }
                let octave = self.octave as i32 + shift;
                Some(frequency_hz(octave, semitone).ok_or(MelodyError::OutOfRange { position })?)
            }
            None => None,
        };

        let length = match self.number() {
            Some(0) => return Err(MelodyError::Zero { position, command: 'l' }),
            Some(n) => n,
            None => self.length,
        };

        let base_ms = WHOLE_NOTE_MS_AT_1_BPM / self.tempo.saturating_mul(length).max(1);
        let mut duration_ms = base_ms;
        let mut extra = base_ms / 2;
        while self.peek() == Some(b'.') {
            self.pos += 1;
            duration_ms += extra;
            extra /= 2;
        }

        let frequency_hz = frequency_hz.filter(|_| self.volume > 0);
        let sound_ms = if self.staccato && frequency_hz.is_some() {
            duration_ms / 2
        } else {
            duration_ms
        };

        Ok(Note {
            frequency_hz,
            duration_ms,
            sound_ms,
            volume: self.volume,
        })
    }
}

impl Iterator for Melody<'_> {
    type Item = Result<Note, MelodyError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_note() {
            Ok(Some(note)) => Some(Ok(note)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Equal-tempered pitch of `semitone` (0 = C, may over/underflow into neighbouring octaves) in
/// `octave`, rounded to whole hertz.
fn frequency_hz(octave: i32, semitone: i32) -> Option<u32> {
    let index = octave * 12 + semitone;
    let octave = index.div_euclid(12);
    if !(0..=MAX_OCTAVE).contains(&octave) {
        return None;
    }
    let centi = OCTAVE_4_CENTI_HZ[index.rem_euclid(12) as usize];
    let centi = if octave >= 4 {
        centi << (octave - 4)
    } else {
        let s = 4 - octave;
        (centi + (1 << (s - 1))) >> s
    };
    Some((centi + 50) / 100)
}
