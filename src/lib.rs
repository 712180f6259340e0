#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Pattern`**: A parsed light characteristic (`Fixed`, `Flash` or `Morse`)
//! - **`parse_pattern`**: Turns chart text such as `"Fl (2+1) R 6s"` into a `Pattern`
//! - **`Pattern::evaluate`**: Light state at an elapsed time, `Some(color)` or `None` (dark)
//! - **`LightColor`**: Chart color codes, with `Error` as a visible failure sentinel
//! - **`GroupSpec`**: Flash counts for the two halves of a grouped period
//! - **`LightChart`**: Drives a table of lights, each on its own LED, with per-light phase offsets
//! - **`RgbLed`**: Trait to implement for your LED hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Parsing and evaluation are pure: no component holds time state, and the
//! same pattern at the same elapsed time always gives the same color.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod chart;
pub mod charts;
pub mod colors;
pub mod flash;
pub mod morse;
pub mod parser;
pub mod pattern;
pub mod time;
pub mod types;

pub use chart::{ChartError, ChartState, LedId, LightChart, RgbLed, TICK_PERIOD_MS};
pub use colors::{LightColor, display_color};
pub use flash::Flash;
pub use morse::Morse;
pub use parser::{decode_group, parse_duration, parse_pattern};
pub use pattern::Pattern;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{GroupSpec, PatternError, Rhythm};

pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);
pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);
pub const GREEN: Srgb = Srgb::new(0.0, 1.0, 0.0);
pub const YELLOW: Srgb = Srgb::new(1.0, 1.0, 0.0);
/// Full white is harsh next to the colored lights on a strip.
pub const WHITE: Srgb = Srgb::new(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0);
/// Shown by lights whose color code was not recognized.
pub const ERROR_MAGENTA: Srgb = Srgb::new(1.0, 0.0, 1.0);

/// Light state of `pattern` at `effective_ms`, the elapsed time plus the
/// light's phase offset. `None` is dark.
#[inline]
pub fn evaluate(pattern: &Pattern, effective_ms: u64) -> Option<LightColor> {
    pattern.color_at_millis(effective_ms)
}
