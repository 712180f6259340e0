//! Parser for chart light characteristics such as `Fl (2+1) R 6s`.
//!
//! The grammar is the fixed-width vocabulary printed on NOAA charts and light
//! lists: a rhythm class token, an optional flash group, a one-letter color
//! and a period. Tokens are matched literally and case-sensitively.

use crate::colors::LightColor;
use crate::flash::Flash;
use crate::morse::Morse;
use crate::pattern::Pattern;
use crate::types::{GroupSpec, PatternError, Rhythm};

/// Shortest accepted characteristic after trimming.
pub const MIN_CHARACTERISTIC_LEN: usize = 2;

/// Longest accepted characteristic after trimming.
pub const MAX_CHARACTERISTIC_LEN: usize = 30;

type ClassParser = fn(Cursor<'_>) -> Result<Pattern, PatternError>;

/// Class tokens, most specific first. Each token includes its separator.
const CLASSES: &[(&str, ClassParser)] = &[
    ("Iso ", isophase),
    ("VQ ", very_quick),
    ("UQ ", ultra_quick),
    ("Q ", quick),
    ("L.Fl ", long_flashing),
    ("Fl ", flashing),
    ("F ", fixed),
    ("Oc ", occulting),
    ("Mo ", morse),
];

/// Parses a light characteristic into a [`Pattern`].
///
/// Leading and trailing whitespace is ignored.
///
/// # Errors
/// * `InvalidLength` - trimmed string is outside 2..=30 bytes
/// * `UnrecognizedClass` - no supported rhythm class prefix
/// * `MalformedMorse` / `InvalidMorseLetter` - bad `Mo (L)` qualifier
/// * `InvalidTiming` - period is missing, zero, or shorter than one blink cycle
///
/// An unknown color code is not an error: it parses to [`LightColor::Error`].
pub fn parse_pattern(characteristic: &str) -> Result<Pattern, PatternError> {
    let text = characteristic.trim();
    if !(MIN_CHARACTERISTIC_LEN..=MAX_CHARACTERISTIC_LEN).contains(&text.len()) {
        return Err(PatternError::InvalidLength(text.len()));
    }

    let mut cursor = Cursor::new(text);
    for &(token, parse_class) in CLASSES {
        if cursor.eat(token) {
            return parse_class(cursor);
        }
    }

    Err(PatternError::UnrecognizedClass)
}

/// Converts a period such as `4s`, `2.5s` or `10` to milliseconds.
///
/// A single trailing `s` is optional. Text that is not a number reads as 0,
/// which every pattern constructor rejects as an invalid period.
pub fn parse_duration(text: &str) -> u32 {
    let text = text.trim();
    let number = text.strip_suffix('s').unwrap_or(text);
    let seconds: f64 = number.trim_end().parse().unwrap_or(0.0);
    // Float to int casts saturate: negatives and NaN become 0.
    libm::round(seconds * 1000.0) as u32
}

/// Decodes an optional flash group at the start of `text`.
///
/// Returns the group and how many bytes it occupies, including the separator
/// that follows the closing parenthesis:
///
/// | Input      | Group                   | Consumed |
/// |------------|-------------------------|----------|
/// | no `(`     | `{1, 0}`                | 0        |
/// | `(d)`      | `{d, 0}`                | 4        |
/// | `(d+d)`    | `{d1, d2}`              | 6        |
/// | `(d+LFl)`  | `{d, 1}` + long flash   | 8        |
///
/// Only single-digit counts are supported.
///
/// # Errors
/// * `MalformedGroup` - text starts with `(` but matches none of the forms
pub fn decode_group(text: &str) -> Result<(GroupSpec, usize), PatternError> {
    let bytes = text.as_bytes();
    if bytes.first() != Some(&b'(') {
        return Ok((GroupSpec::SINGLE, 0));
    }

    let count1 = bytes
        .get(1)
        .and_then(|&b| digit(b))
        .ok_or(PatternError::MalformedGroup)?;

    match &bytes[2..] {
        [b')', ..] => Ok((GroupSpec::new(count1, 0), 4)),
        [b'+', b'L', b'F', b'l', b')', ..] => Ok((GroupSpec::with_long_flash(count1), 8)),
        [b'+', count2, b')', ..] => {
            let count2 = digit(*count2).ok_or(PatternError::MalformedGroup)?;
            Ok((GroupSpec::new(count1, count2), 6))
        }
        _ => Err(PatternError::MalformedGroup),
    }
}

fn digit(byte: u8) -> Option<u8> {
    byte.is_ascii_digit().then(|| byte - b'0')
}

/// Read position over an immutable characteristic string.
#[derive(Debug, Clone, Copy)]
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Text from `offset` bytes past the cursor, empty if out of range.
    fn skip(&self, offset: usize) -> &'a str {
        self.text
            .get(self.pos.saturating_add(offset)..)
            .unwrap_or("")
    }

    fn rest(&self) -> &'a str {
        self.skip(0)
    }

    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.text
            .as_bytes()
            .get(self.pos.saturating_add(offset))
            .copied()
    }

    fn eat(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.advance(literal.len());
            true
        } else {
            false
        }
    }

    fn advance(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.text.len());
    }

    /// Color code at the cursor.
    fn color(&self) -> LightColor {
        self.byte_at(0)
            .map_or(LightColor::Error, |code| LightColor::from_code(char::from(code)))
    }

    /// Period following the color code and its separator.
    fn period(&self) -> u32 {
        parse_duration(self.skip(2))
    }
}

fn fixed(cursor: Cursor<'_>) -> Result<Pattern, PatternError> {
    Ok(Pattern::Fixed {
        color: cursor.color(),
    })
}

fn isophase(cursor: Cursor<'_>) -> Result<Pattern, PatternError> {
    Flash::isophase(cursor.color(), cursor.period()).map(Pattern::from)
}

fn quick(cursor: Cursor<'_>) -> Result<Pattern, PatternError> {
    quick_family(cursor, Rhythm::Quick)
}

fn very_quick(cursor: Cursor<'_>) -> Result<Pattern, PatternError> {
    quick_family(cursor, Rhythm::VeryQuick)
}

fn ultra_quick(cursor: Cursor<'_>) -> Result<Pattern, PatternError> {
    quick_family(cursor, Rhythm::UltraQuick)
}

fn flashing(cursor: Cursor<'_>) -> Result<Pattern, PatternError> {
    grouped(cursor, Rhythm::Flashing)
}

fn long_flashing(cursor: Cursor<'_>) -> Result<Pattern, PatternError> {
    grouped(cursor, Rhythm::LongFlashing)
}

fn occulting(cursor: Cursor<'_>) -> Result<Pattern, PatternError> {
    grouped(cursor, Rhythm::Occulting)
}

/// `Q C` repeats every class cycle; `Q (g) C period` is a grouped light.
fn quick_family(cursor: Cursor<'_>, rhythm: Rhythm) -> Result<Pattern, PatternError> {
    if cursor.byte_at(0) == Some(b'(') {
        return grouped(cursor, rhythm);
    }

    let cycle = rhythm.flash_timing().map_or(0, |(_, cycle)| cycle);
    Flash::standard(rhythm, cursor.color(), GroupSpec::SINGLE, cycle).map(Pattern::from)
}

/// `[group] C period` using the rhythm's standard blink shape.
fn grouped(mut cursor: Cursor<'_>, rhythm: Rhythm) -> Result<Pattern, PatternError> {
    let group = match decode_group(cursor.rest()) {
        Ok((group, consumed)) => {
            cursor.advance(consumed);
            group
        }
        // Read as ungrouped; the color lookup then lands on the group text.
        Err(_) => GroupSpec::SINGLE,
    };

    Flash::standard(rhythm, cursor.color(), group, cursor.period()).map(Pattern::from)
}

/// `(L) C period`
fn morse(mut cursor: Cursor<'_>) -> Result<Pattern, PatternError> {
    if cursor.byte_at(0) != Some(b'(') || cursor.byte_at(2) != Some(b')') {
        return Err(PatternError::MalformedMorse);
    }

    // Bracketed by ASCII on both sides, so this byte is a whole character.
    let letter = cursor.byte_at(1).map_or('\0', char::from);
    cursor.advance(4);
    Morse::new(letter, cursor.color(), cursor.period()).map(Pattern::from)
}
