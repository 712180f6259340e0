//! Core types shared by the parser and the evaluators.

/// Standard flash: on time and full cycle (30 flashes per minute).
pub const FLASH_DURATION_MS: u32 = 500;
pub const FLASH_CYCLE_MS: u32 = 2000;

/// Quick flashing (60 per minute).
pub const QUICK_DURATION_MS: u32 = 500;
pub const QUICK_CYCLE_MS: u32 = 1000;

/// Very quick flashing (120 per minute).
pub const VERY_QUICK_DURATION_MS: u32 = 250;
pub const VERY_QUICK_CYCLE_MS: u32 = 500;

/// Ultra quick flashing (240 per minute).
pub const ULTRA_QUICK_DURATION_MS: u32 = 125;
pub const ULTRA_QUICK_CYCLE_MS: u32 = 250;

/// Long flash (at least two seconds on).
pub const LONG_FLASH_DURATION_MS: u32 = 2000;
pub const LONG_FLASH_CYCLE_MS: u32 = 4000;

/// Rhythm class of a light characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rhythm {
    /// Steady light (`F`).
    Fixed,
    /// Equal light and dark intervals (`Iso`).
    Isophase,
    /// `Q`, with or without a group.
    Quick,
    /// `VQ`, with or without a group.
    VeryQuick,
    /// `UQ`, with or without a group.
    UltraQuick,
    /// `Fl`.
    Flashing,
    /// `L.Fl`.
    LongFlashing,
    /// `Oc`: normally lit, briefly eclipsed.
    Occulting,
    /// `Mo`.
    Morse,
}

impl Rhythm {
    /// Fixed on time and on+off cycle for rhythms with a constant flash shape.
    ///
    /// Returns `None` for rhythms whose timing comes from elsewhere
    /// (`Fixed`, `Isophase`, `Morse`).
    pub const fn flash_timing(self) -> Option<(u32, u32)> {
        match self {
            Rhythm::Quick => Some((QUICK_DURATION_MS, QUICK_CYCLE_MS)),
            Rhythm::VeryQuick => Some((VERY_QUICK_DURATION_MS, VERY_QUICK_CYCLE_MS)),
            Rhythm::UltraQuick => Some((ULTRA_QUICK_DURATION_MS, ULTRA_QUICK_CYCLE_MS)),
            Rhythm::Flashing | Rhythm::Occulting => Some((FLASH_DURATION_MS, FLASH_CYCLE_MS)),
            Rhythm::LongFlashing => Some((LONG_FLASH_DURATION_MS, LONG_FLASH_CYCLE_MS)),
            Rhythm::Fixed | Rhythm::Isophase | Rhythm::Morse => None,
        }
    }

    /// True if the light is normally lit and the "flash" is a dark interval.
    pub const fn is_inverted(self) -> bool {
        matches!(self, Rhythm::Occulting)
    }
}

/// Flash counts for the two halves of a grouped period.
///
/// `count1` flashes are shown in the first half of the period and `count2`
/// in the second. When `count2_is_long_flash` is set the second half shows
/// `count2` long flashes instead of short ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GroupSpec {
    pub count1: u8,
    pub count2: u8,
    pub count2_is_long_flash: bool,
}

impl GroupSpec {
    /// No group qualifier: one flash per period.
    pub const SINGLE: Self = Self::new(1, 0);

    /// Creates a group of short flashes.
    #[inline]
    pub const fn new(count1: u8, count2: u8) -> Self {
        Self {
            count1,
            count2,
            count2_is_long_flash: false,
        }
    }

    /// Creates a group followed by a single long flash, e.g. `(6+LFl)`.
    #[inline]
    pub const fn with_long_flash(count1: u8) -> Self {
        Self {
            count1,
            count2: 1,
            count2_is_long_flash: true,
        }
    }
}

impl Default for GroupSpec {
    fn default() -> Self {
        Self::SINGLE
    }
}

/// Reasons a characteristic string yields no pattern.
///
/// None of these are fatal to the caller: a light whose string fails to parse
/// simply stays dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternError {
    /// Trimmed string is shorter than 2 or longer than 30 bytes.
    InvalidLength(usize),

    /// No supported rhythm class prefix.
    UnrecognizedClass,

    /// Group qualifier is not `(d)`, `(d+d)` or `(d+LFl)`.
    MalformedGroup,

    /// Morse letter is not wrapped as `(L)`.
    MalformedMorse,

    /// Morse letter outside `A`..=`Z`.
    InvalidMorseLetter(char),

    /// Period is zero or shorter than one on/off cycle.
    InvalidTiming {
        period_ms: u32,
        cycle_ms: u32,
    },
}

impl core::fmt::Display for PatternError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PatternError::InvalidLength(len) => {
                write!(f, "characteristic length {} outside 2..=30", len)
            }
            PatternError::UnrecognizedClass => {
                write!(f, "unrecognized light rhythm class")
            }
            PatternError::MalformedGroup => {
                write!(f, "malformed flash group qualifier")
            }
            PatternError::MalformedMorse => {
                write!(f, "morse letter must be written as (L)")
            }
            PatternError::InvalidMorseLetter(letter) => {
                write!(f, "morse letter {:?} is not in A-Z", letter)
            }
            PatternError::InvalidTiming { period_ms, cycle_ms } => {
                write!(
                    f,
                    "period of {}ms cannot hold a {}ms flash cycle",
                    period_ms, cycle_ms
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PatternError {}
