//! Time abstraction traits for platform-agnostic timing.
//!
//! Evaluation only ever needs a millisecond count. These traits let callers
//! hand in whatever their HAL produces (`embassy_time::Duration`, a SysTick
//! counter, a plain integer) without the library holding any clock state.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations backed by a wrapping counter should use wrapping
    /// subtraction; all pattern math is modulo-based and tolerates it.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

impl TimeDuration for u64 {
    #[inline]
    fn as_millis(&self) -> u64 {
        *self
    }
}

impl TimeDuration for u32 {
    #[inline]
    fn as_millis(&self) -> u64 {
        u64::from(*self)
    }
}
