//! Driving a bank of LEDs from a table of chart lights.
//!
//! Provides [`LightChart`], which owns one [`RgbLed`] per charted light and
//! writes each light's color for the current elapsed time. Also defines the
//! [`RgbLed`] trait for hardware abstraction.
//!
//! Every light is evaluated at `elapsed + phase_offset`, so lights sharing a
//! rhythm do not flash in lockstep.

use crate::COLOR_OFF;
use crate::colors::display_color;
use crate::parser::parse_pattern;
use crate::pattern::Pattern;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::PatternError;
use heapless::Vec;
use palette::Srgb;

/// Recommended interval between [`LightChart::service`] calls.
pub const TICK_PERIOD_MS: u32 = 100;

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED hardware (a pixel in a NeoPixel strip, a PWM
/// channel triple, etc.) to allow the chart to control it.
pub trait RgbLed {
    /// Sets the LED to the specified RGB color.
    ///
    /// Color components are in the range 0.0-1.0. Handle any hardware errors
    /// internally - this method cannot fail.
    fn set_color(&mut self, color: Srgb);
}

/// An identifier for a light within a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedId(pub usize);

impl From<usize> for LedId {
    fn from(id: usize) -> Self {
        LedId(id)
    }
}

impl From<LedId> for usize {
    fn from(id: LedId) -> Self {
        id.0
    }
}

/// Run state of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChartState {
    /// Not started, or stopped. All LEDs are off.
    Stopped,
    /// Lights follow the time source.
    Running,
}

/// Errors that can occur during chart operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChartError {
    /// The specified LED ID does not exist in the chart.
    InvalidLedId(LedId),

    /// Attempted to add a light with an ID that already exists.
    DuplicateLedId(LedId),

    /// The LED ID exceeds the chart's capacity.
    LedIdOutOfBounds { id: LedId, capacity: usize },

    /// Operation called from an invalid state.
    InvalidState {
        expected: ChartState,
        actual: ChartState,
    },
}

impl core::fmt::Display for ChartError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChartError::InvalidLedId(id) => {
                write!(f, "LED ID {} does not exist in chart", id.0)
            }
            ChartError::DuplicateLedId(id) => {
                write!(f, "LED ID {} already exists in chart", id.0)
            }
            ChartError::LedIdOutOfBounds { id, capacity } => {
                write!(
                    f,
                    "LED ID {} exceeds chart capacity of {}",
                    id.0, capacity
                )
            }
            ChartError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {:?}, but chart is {:?}",
                    expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChartError {}

/// One LED and the light it shows.
struct ChartedLight<L: RgbLed> {
    led: L,
    pattern: Result<Pattern, PatternError>,
    phase_offset_ms: u32,
    current_color: Srgb,
}

impl<L: RgbLed> ChartedLight<L> {
    /// Color for this light `elapsed_ms` after the chart epoch.
    fn color_at(&self, elapsed_ms: u64) -> Srgb {
        match &self.pattern {
            Ok(pattern) => {
                let effective = elapsed_ms.wrapping_add(u64::from(self.phase_offset_ms));
                display_color(pattern.color_at_millis(effective))
            }
            Err(_) => COLOR_OFF,
        }
    }

    /// Writes `color` if it differs from what the LED shows. Returns true if written.
    fn show(&mut self, color: Srgb) -> bool {
        if color == self.current_color {
            return false;
        }
        self.led.set_color(color);
        self.current_color = color;
        true
    }
}

/// Drives a table of chart lights, each on its own LED.
///
/// Characteristics are parsed once when a light is added. A characteristic
/// that does not parse leaves its LED dark without affecting other lights.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `L` - LED implementation type (must be same for all LEDs in the chart)
/// * `T` - Time source implementation type
/// * `N` - Maximum number of lights this chart can hold
pub struct LightChart<'t, I: TimeInstant, L: RgbLed, T: TimeSource<I>, const N: usize> {
    lights: [Option<ChartedLight<L>>; N],
    time_source: &'t T,
    epoch: Option<I>,
}

impl<'t, I, L, T, const N: usize> LightChart<'t, I, L, T, N>
where
    I: TimeInstant,
    L: RgbLed,
    T: TimeSource<I>,
{
    /// Creates an empty, stopped chart.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            lights: core::array::from_fn(|_| None),
            time_source,
            epoch: None,
        }
    }

    /// Adds a light using the default phase offset for its charted color.
    ///
    /// The LED is turned off until the next render.
    ///
    /// # Errors
    /// * `DuplicateLedId` - A light with this ID already exists
    /// * `LedIdOutOfBounds` - The ID exceeds the chart's capacity
    pub fn add_light(&mut self, id: LedId, characteristic: &str, led: L) -> Result<(), ChartError> {
        let pattern = parse_pattern(characteristic);
        let phase_offset_ms = pattern
            .as_ref()
            .map_or(0, |pattern| pattern.color().phase_offset_ms());
        self.insert(id, pattern, phase_offset_ms, led)
    }

    /// Adds a light with an explicit phase offset.
    ///
    /// # Errors
    /// * `DuplicateLedId` - A light with this ID already exists
    /// * `LedIdOutOfBounds` - The ID exceeds the chart's capacity
    pub fn add_light_with_phase(
        &mut self,
        id: LedId,
        characteristic: &str,
        phase_offset_ms: u32,
        led: L,
    ) -> Result<(), ChartError> {
        self.insert(id, parse_pattern(characteristic), phase_offset_ms, led)
    }

    fn insert(
        &mut self,
        id: LedId,
        pattern: Result<Pattern, PatternError>,
        phase_offset_ms: u32,
        mut led: L,
    ) -> Result<(), ChartError> {
        let idx = id.0;

        if idx >= N {
            return Err(ChartError::LedIdOutOfBounds { id, capacity: N });
        }

        if self.lights[idx].is_some() {
            return Err(ChartError::DuplicateLedId(id));
        }

        #[cfg(feature = "defmt")]
        {
            if let Err(err) = &pattern {
                defmt::warn!("light {} stays dark: {}", id, err);
            }
        }

        led.set_color(COLOR_OFF);
        self.lights[idx] = Some(ChartedLight {
            led,
            pattern,
            phase_offset_ms,
            current_color: COLOR_OFF,
        });
        Ok(())
    }

    /// Writes every light's color for the given elapsed time.
    ///
    /// Only LEDs whose color changed are written. Works in any state; use
    /// this when the caller keeps its own tick counter.
    ///
    /// # Returns
    /// The number of LEDs written.
    pub fn render<D: TimeDuration>(&mut self, elapsed: D) -> usize {
        let elapsed_ms = elapsed.as_millis();
        let mut written = 0;

        for light in self.lights.iter_mut().flatten() {
            let color = light.color_at(elapsed_ms);
            if light.show(color) {
                written += 1;
            }
        }

        written
    }

    /// Calculates every slot's color without touching the LEDs.
    ///
    /// For strip drivers that flush a whole frame at once. Empty slots and
    /// lights that did not parse are off.
    pub fn frame<D: TimeDuration>(&self, elapsed: D) -> Vec<Srgb, N> {
        let elapsed_ms = elapsed.as_millis();
        self.lights
            .iter()
            .map(|slot| slot.as_ref().map_or(COLOR_OFF, |light| light.color_at(elapsed_ms)))
            .collect()
    }

    /// Starts the chart, taking the current time as the epoch.
    ///
    /// # Errors
    /// * `InvalidState` - The chart is already running
    pub fn start(&mut self) -> Result<usize, ChartError> {
        if self.epoch.is_some() {
            return Err(ChartError::InvalidState {
                expected: ChartState::Stopped,
                actual: ChartState::Running,
            });
        }

        #[cfg(feature = "defmt")]
        defmt::info!("starting chart with {} lights", self.len());

        self.epoch = Some(self.time_source.now());
        self.service()
    }

    /// Renders the chart at the time source's current time.
    ///
    /// Call every [`TICK_PERIOD_MS`] or so.
    ///
    /// # Returns
    /// * `Ok(n)` - `n` LEDs were written
    /// * `Err` - The chart is not running
    pub fn service(&mut self) -> Result<usize, ChartError> {
        let epoch = self.epoch.ok_or(ChartError::InvalidState {
            expected: ChartState::Running,
            actual: ChartState::Stopped,
        })?;

        let elapsed = self.time_source.now().duration_since(epoch);
        Ok(self.render(elapsed))
    }

    /// Stops the chart and turns off every LED.
    ///
    /// # Errors
    /// * `InvalidState` - The chart is not running
    pub fn stop(&mut self) -> Result<(), ChartError> {
        if self.epoch.take().is_none() {
            return Err(ChartError::InvalidState {
                expected: ChartState::Running,
                actual: ChartState::Stopped,
            });
        }

        #[cfg(feature = "defmt")]
        defmt::info!("stopping chart");

        for light in self.lights.iter_mut().flatten() {
            light.show(COLOR_OFF);
        }
        Ok(())
    }

    /// Returns the current run state.
    pub fn state(&self) -> ChartState {
        if self.epoch.is_some() {
            ChartState::Running
        } else {
            ChartState::Stopped
        }
    }

    /// Returns the parsed pattern for a light, or why it did not parse.
    ///
    /// # Errors
    /// Returns `InvalidLedId` if the light does not exist in the chart.
    pub fn pattern(&self, id: LedId) -> Result<Result<Pattern, PatternError>, ChartError> {
        self.light(id).map(|light| light.pattern)
    }

    /// Returns the phase offset applied to a light.
    ///
    /// # Errors
    /// Returns `InvalidLedId` if the light does not exist in the chart.
    pub fn phase_offset_ms(&self, id: LedId) -> Result<u32, ChartError> {
        self.light(id).map(|light| light.phase_offset_ms)
    }

    /// Returns the color last written to a light's LED.
    ///
    /// # Errors
    /// Returns `InvalidLedId` if the light does not exist in the chart.
    pub fn current_color(&self, id: LedId) -> Result<Srgb, ChartError> {
        self.light(id).map(|light| light.current_color)
    }

    fn light(&self, id: LedId) -> Result<&ChartedLight<L>, ChartError> {
        self.lights
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(ChartError::InvalidLedId(id))
    }

    /// Returns the number of lights currently in the chart.
    pub fn len(&self) -> usize {
        self.lights.iter().filter(|l| l.is_some()).count()
    }

    /// Returns true if the chart contains no lights.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the chart contains a light with the given ID.
    pub fn contains(&self, id: LedId) -> bool {
        self.lights.get(id.0).is_some_and(Option::is_some)
    }
}
