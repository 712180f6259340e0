//! Morse code lights (`Mo (L)`).
//!
//! The letter is keyed once per period starting at the period boundary, then
//! the light stays dark for the remainder.

use crate::colors::LightColor;
use crate::types::PatternError;

/// Length of one Morse unit.
pub const MORSE_UNIT_MS: u32 = 500;
pub const DOT_MS: u32 = MORSE_UNIT_MS;
pub const DASH_MS: u32 = 3 * MORSE_UNIT_MS;
/// Dark gap following every symbol.
pub const SYMBOL_GAP_MS: u32 = MORSE_UNIT_MS;

/// Returns the dot/dash code for an uppercase ASCII letter.
pub const fn morse_code(letter: char) -> Option<&'static str> {
    let code = match letter {
        'A' => ".-",
        'B' => "-...",
        'C' => "-.-.",
        'D' => "-..",
        'E' => ".",
        'F' => "..-.",
        'G' => "--.",
        'H' => "....",
        'I' => "..",
        'J' => ".---",
        'K' => "-.-",
        'L' => ".-..",
        'M' => "--",
        'N' => "-.",
        'O' => "---",
        'P' => ".--.",
        'Q' => "--.-",
        'R' => ".-.",
        'S' => "...",
        'T' => "-",
        'U' => "..-",
        'V' => "...-",
        'W' => ".--",
        'X' => "-..-",
        'Y' => "-.--",
        'Z' => "--..",
        _ => return None,
    };
    Some(code)
}

fn symbol_length(symbol: u8) -> u32 {
    if symbol == b'.' { DOT_MS } else { DASH_MS }
}

fn keyed_length(code: &str) -> u32 {
    code.bytes().map(|symbol| symbol_length(symbol) + SYMBOL_GAP_MS).sum()
}

/// Time-independent description of a Morse light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Morse {
    letter: char,
    code: &'static str,
    color: LightColor,
    period: u32,
}

impl Morse {
    /// Creates a Morse descriptor.
    ///
    /// # Errors
    /// * `InvalidMorseLetter` - `letter` is not in `A`..=`Z`
    /// * `InvalidTiming` - `period` is zero
    pub fn new(letter: char, color: LightColor, period: u32) -> Result<Self, PatternError> {
        let code = morse_code(letter).ok_or(PatternError::InvalidMorseLetter(letter))?;
        if period == 0 {
            return Err(PatternError::InvalidTiming {
                period_ms: period,
                cycle_ms: keyed_length(code),
            });
        }

        Ok(Self {
            letter,
            code,
            color,
            period,
        })
    }

    /// Calculates the light state `millis` after the pattern epoch.
    pub fn color_at(&self, millis: u64) -> Option<LightColor> {
        let position = millis % u64::from(self.period);

        let mut start = 0u64;
        for symbol in self.code.bytes() {
            let end = start + u64::from(symbol_length(symbol));
            if (start..end).contains(&position) {
                return Some(self.color);
            }
            start = end + u64::from(SYMBOL_GAP_MS);
        }

        None
    }

    /// Time from the first symbol until the gap after the last one ends.
    pub fn keyed_duration(&self) -> u32 {
        keyed_length(self.code)
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    /// The letter's dot/dash code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn color(&self) -> LightColor {
        self.color
    }

    pub fn period(&self) -> u32 {
        self.period
    }
}
