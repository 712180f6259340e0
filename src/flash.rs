//! Grouped on/off flash timing.
//!
//! A [`Flash`] covers every rhythm that is a train of identical blinks:
//! isophase, the quick family, flashing, long flashing and occulting. They
//! differ only in which color is "on", the blink shape and the group counts.
//!
//! The period is split into two halves. The first half shows `count1` blinks,
//! the second half `count2`. With `group = (2)`, a 500ms blink in a 2000ms
//! cycle and a 6000ms period, one period looks like this (`+` lit, `-` dark):
//!
//! ```text
//! |{+----+----}{------}|
//!  first half   second half
//! ```

use crate::colors::LightColor;
use crate::types::{GroupSpec, LONG_FLASH_CYCLE_MS, LONG_FLASH_DURATION_MS, PatternError, Rhythm};

/// Time-independent description of a flashing light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Flash {
    rhythm: Rhythm,
    on_color: Option<LightColor>,
    off_color: Option<LightColor>,
    group: GroupSpec,
    on_time: u32,
    off_time: u32,
    period: u32,
}

impl Flash {
    /// Creates a flash descriptor from explicit timing.
    ///
    /// `color` is the charted color. For inverted rhythms (occulting) it is
    /// shown outside the blinks and the blinks themselves are dark.
    ///
    /// # Errors
    /// * `InvalidTiming` - `period` is zero, or one on/off cycle is empty or
    ///   longer than the period
    pub fn new(
        rhythm: Rhythm,
        color: LightColor,
        group: GroupSpec,
        on_time: u32,
        off_time: u32,
        period: u32,
    ) -> Result<Self, PatternError> {
        let cycle = on_time.saturating_add(off_time);
        if period == 0 || cycle == 0 || cycle > period {
            return Err(PatternError::InvalidTiming {
                period_ms: period,
                cycle_ms: cycle,
            });
        }

        let (on_color, off_color) = if rhythm.is_inverted() {
            (None, Some(color))
        } else {
            (Some(color), None)
        };

        Ok(Self {
            rhythm,
            on_color,
            off_color,
            group,
            on_time,
            off_time,
            period,
        })
    }

    /// Creates a descriptor using the rhythm's standard blink shape.
    ///
    /// # Errors
    /// * `InvalidTiming` - the rhythm has no standard shape, or `period` is
    ///   shorter than one cycle
    pub fn standard(
        rhythm: Rhythm,
        color: LightColor,
        group: GroupSpec,
        period: u32,
    ) -> Result<Self, PatternError> {
        let (on_time, cycle) = rhythm.flash_timing().ok_or(PatternError::InvalidTiming {
            period_ms: period,
            cycle_ms: 0,
        })?;
        Self::new(rhythm, color, group, on_time, cycle - on_time, period)
    }

    /// Creates an isophase descriptor: lit for the first half of the period.
    ///
    /// # Errors
    /// * `InvalidTiming` - `period` is shorter than 2ms
    pub fn isophase(color: LightColor, period: u32) -> Result<Self, PatternError> {
        let half = period / 2;
        Self::new(Rhythm::Isophase, color, GroupSpec::SINGLE, half, half, period)
    }

    /// Calculates the light state `millis` after the pattern epoch.
    ///
    /// Returns `None` when the light is dark.
    pub fn color_at(&self, millis: u64) -> Option<LightColor> {
        let period = u64::from(self.period);
        let mut position = millis % period;
        let mut on_time = u64::from(self.on_time);
        let mut cycle = u64::from(self.on_time) + u64::from(self.off_time);

        let group_size = if position * 2 < period {
            self.group.count1
        } else {
            if self.group.count2_is_long_flash {
                on_time = u64::from(LONG_FLASH_DURATION_MS);
                cycle = u64::from(LONG_FLASH_CYCLE_MS);
            }
            // Reaching the second half implies period >= 2, so half is non-zero.
            position %= period / 2;
            self.group.count2
        };

        let blink = position / cycle;
        let within_blink = position % cycle;
        if blink < u64::from(group_size) && within_blink <= on_time {
            self.on_color
        } else {
            self.off_color
        }
    }

    pub fn rhythm(&self) -> Rhythm {
        self.rhythm
    }

    pub fn on_color(&self) -> Option<LightColor> {
        self.on_color
    }

    pub fn off_color(&self) -> Option<LightColor> {
        self.off_color
    }

    /// The charted color, regardless of inversion.
    pub fn color(&self) -> LightColor {
        self.on_color.or(self.off_color).unwrap_or(LightColor::Error)
    }

    pub fn group(&self) -> GroupSpec {
        self.group
    }

    pub fn on_time(&self) -> u32 {
        self.on_time
    }

    pub fn off_time(&self) -> u32 {
        self.off_time
    }

    pub fn period(&self) -> u32 {
        self.period
    }
}
