//! # Utilities
//! Small helpers shared by the display crates.
//!

use core::{fmt::Display, time::Duration};
use std::time::Instant;

use tracing::debug;

/// Formats a duration with a single unit. Units are picked in the following order:
/// 1. `>= 10s` displays seconds only.
/// 1. `>= 1s` displays seconds with 1dp.
/// 1. `>= 1ms` displays milliseconds only.
/// 1. `>= 1µs` displays microseconds only.
/// 1. `< 1µs` displays nanoseconds only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattedDuration(pub Duration);

impl Display for FormattedDuration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let duration = self.0;

        if duration.as_secs() >= 10 {
            write!(f, "{}s", duration.as_secs())
        } else if duration.as_secs() >= 1 {
            write!(f, "{:.1}s", duration.as_secs_f32())
        } else if duration.as_millis() >= 1 {
            write!(f, "{}ms", duration.as_millis())
        } else if duration.as_micros() >= 1 {
            write!(f, "{}µs", duration.as_micros())
        } else {
            write!(f, "{}ns", duration.as_nanos())
        }
    }
}

/// Logs the time since construction at `debug` level when dropped, as
/// `[Timing] {label} took {duration}`.
#[derive(Debug)]
pub struct DebugTime {
    label: &'static str,
    start: Instant,
}

impl DebugTime {
    /// Start a new debug timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    /// The time since the timer started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for DebugTime {
    fn drop(&mut self) {
        debug!(
            "[Timing] {} took {}",
            self.label,
            FormattedDuration(self.elapsed())
        );
    }
}
