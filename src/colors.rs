//! Chart color codes and their display values.
//!
//! Light characteristics name their color with a single letter. Anything the
//! resolver does not recognize becomes [`LightColor::Error`], which renders as
//! a garish magenta so a bad table entry is obvious on the hardware.

use crate::{COLOR_OFF, ERROR_MAGENTA, GREEN, RED, WHITE, YELLOW};
use palette::Srgb;

/// Base phase unit for per-color offsets (one standard flash).
const PHASE_UNIT_MS: u32 = 500;

/// Color of a navigational light as printed on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightColor {
    Red,
    Green,
    Yellow,
    White,
    /// Unrecognized color code.
    Error,
}

impl LightColor {
    /// Resolves a chart color code. Total: unknown codes map to `Error`.
    pub const fn from_code(code: char) -> Self {
        match code {
            'R' => LightColor::Red,
            'G' => LightColor::Green,
            'Y' => LightColor::Yellow,
            'W' => LightColor::White,
            _ => LightColor::Error,
        }
    }

    /// Returns the chart code for this color, or `None` for `Error`.
    pub const fn code(self) -> Option<char> {
        match self {
            LightColor::Red => Some('R'),
            LightColor::Green => Some('G'),
            LightColor::Yellow => Some('Y'),
            LightColor::White => Some('W'),
            LightColor::Error => None,
        }
    }

    /// Converts to the value written to the LED.
    pub const fn to_srgb(self) -> Srgb {
        match self {
            LightColor::Red => RED,
            LightColor::Green => GREEN,
            LightColor::Yellow => YELLOW,
            LightColor::White => WHITE,
            LightColor::Error => ERROR_MAGENTA,
        }
    }

    /// Default phase offset for lights of this color.
    ///
    /// Staggering colors by one flash keeps same-period lights of different
    /// colors from drawing peak current at the same instant.
    pub const fn phase_offset_ms(self) -> u32 {
        match self {
            LightColor::Red | LightColor::Error => 0,
            LightColor::Yellow => PHASE_UNIT_MS,
            LightColor::White => PHASE_UNIT_MS * 2,
            LightColor::Green => PHASE_UNIT_MS * 3,
        }
    }
}

/// Converts an evaluated light state to its display value. `None` is off.
#[inline]
pub const fn display_color(state: Option<LightColor>) -> Srgb {
    match state {
        Some(color) => color.to_srgb(),
        None => COLOR_OFF,
    }
}
