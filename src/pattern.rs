//! Parsed light patterns and their evaluation.

use crate::colors::LightColor;
use crate::flash::Flash;
use crate::morse::Morse;
use crate::parser::parse_pattern;
use crate::time::TimeDuration;
use crate::types::{PatternError, Rhythm};

/// A light characteristic, parsed once and evaluated at any time.
///
/// Patterns hold no time state. Evaluating the same pattern at the same
/// elapsed time always yields the same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pattern {
    /// Steady light.
    Fixed { color: LightColor },

    /// Any rhythm built from grouped on/off blinks.
    Flash(Flash),

    /// A single Morse letter keyed once per period.
    Morse(Morse),
}

impl Pattern {
    /// Calculates the light state at a given elapsed time.
    ///
    /// `elapsed` should already include the light's phase offset.
    ///
    /// # Returns
    /// * `Some(color)` - The light is lit with this color
    /// * `None` - The light is dark
    #[inline]
    pub fn evaluate<D: TimeDuration>(&self, elapsed: D) -> Option<LightColor> {
        self.color_at_millis(elapsed.as_millis())
    }

    /// Calculates the light state at `millis` after the pattern epoch.
    pub fn color_at_millis(&self, millis: u64) -> Option<LightColor> {
        match self {
            Pattern::Fixed { color } => Some(*color),
            Pattern::Flash(flash) => flash.color_at(millis),
            Pattern::Morse(morse) => morse.color_at(millis),
        }
    }

    /// Repeat period in milliseconds, or `None` for a fixed light.
    pub fn period_ms(&self) -> Option<u32> {
        match self {
            Pattern::Fixed { .. } => None,
            Pattern::Flash(flash) => Some(flash.period()),
            Pattern::Morse(morse) => Some(morse.period()),
        }
    }

    /// Returns the rhythm class this pattern was parsed from.
    pub fn rhythm(&self) -> Rhythm {
        match self {
            Pattern::Fixed { .. } => Rhythm::Fixed,
            Pattern::Flash(flash) => flash.rhythm(),
            Pattern::Morse(_) => Rhythm::Morse,
        }
    }

    /// Returns the charted color.
    pub fn color(&self) -> LightColor {
        match self {
            Pattern::Fixed { color } => *color,
            Pattern::Flash(flash) => flash.color(),
            Pattern::Morse(morse) => morse.color(),
        }
    }
}

impl From<Flash> for Pattern {
    fn from(flash: Flash) -> Self {
        Pattern::Flash(flash)
    }
}

impl From<Morse> for Pattern {
    fn from(morse: Morse) -> Self {
        Pattern::Morse(morse)
    }
}

impl core::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(characteristic: &str) -> Result<Self, Self::Err> {
        parse_pattern(characteristic)
    }
}
