//! Shared test infrastructure for nautical-lights integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::RefCell;
use std::rc::Rc;

use nautical_lights::{RgbLed, Srgb, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records all color changes for testing
///
/// The chart takes ownership of its LEDs, so the history lives behind a
/// shared handle that the test keeps.
pub struct MockLed {
    history: Rc<RefCell<Vec<Srgb>>>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            history: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Returns a handle for inspecting this LED after it is moved.
    pub fn probe(&self) -> LedProbe {
        LedProbe {
            history: Rc::clone(&self.history),
        }
    }
}

impl RgbLed for MockLed {
    fn set_color(&mut self, color: Srgb) {
        self.history.borrow_mut().push(color);
    }
}

/// Read side of a [`MockLed`].
pub struct LedProbe {
    history: Rc<RefCell<Vec<Srgb>>>,
}

impl LedProbe {
    pub fn get_last_color(&self) -> Option<Srgb> {
        self.history.borrow().last().copied()
    }

    pub fn write_count(&self) -> usize {
        self.history.borrow().len()
    }

    pub fn color_history(&self) -> Vec<Srgb> {
        self.history.borrow().clone()
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use nautical_lights::{COLOR_OFF, ERROR_MAGENTA, GREEN, RED, WHITE, YELLOW};

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Samples a pattern every `step` milliseconds over `0..until`.
pub fn lit_millis(pattern: &nautical_lights::Pattern, until: u64, step: u64) -> u64 {
    (0..until)
        .step_by(step as usize)
        .filter(|&t| pattern.evaluate(TestDuration(t)).is_some())
        .count() as u64
        * step
}
