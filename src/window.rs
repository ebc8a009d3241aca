//! Analysis window over which spike trains are compared.
//!
//! Spikes outside the window are dropped before any statistic is computed.
//! Both bounds are inclusive.
//!
//! # Examples
//!
//! ```
//! use rusty_sttc::window::Window;
//!
//! let window = Window::new(0.0, 1.0).unwrap();
//! let times = vec![-5.0, 0.0, 0.5, 1.0, 5.0];
//! assert_eq!(window.clip(&times), &[0.0, 0.5, 1.0]);
//! ```
use serde::{Deserialize, Serialize};

use crate::error::SttcError;

/// A closed time interval [start, end] with start < end.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "WindowBounds")]
pub struct Window {
    start: f64,
    end: f64,
}

impl Window {
    /// Create a new analysis window.
    /// Returns an error if a bound is not finite or if end is not greater than start.
    pub fn new(start: f64, end: f64) -> Result<Self, SttcError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(SttcError::InvalidWindow(format!(
                "bounds must be finite, got [{}, {}]",
                start, end
            )));
        }
        if end <= start {
            return Err(SttcError::InvalidWindow(format!(
                "end ({}) must be greater than start ({})",
                end, start
            )));
        }
        Ok(Window { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// The length of the window.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time <= self.end
    }

    /// Returns the longest contiguous run of (sorted) spike times lying in the window.
    ///
    /// The leading spikes before start and the trailing spikes after end are trimmed off;
    /// interior spikes are never inspected or reordered.
    /// The returned slice borrows from the input, which is left untouched.
    pub fn clip<'a>(&self, times: &'a [f64]) -> &'a [f64] {
        let first = times.partition_point(|&time| time < self.start);
        let last = first + times[first..].partition_point(|&time| time <= self.end);
        &times[first..last]
    }
}

/// Unchecked bounds, validated by `Window::new` on deserialization.
#[derive(Deserialize)]
struct WindowBounds {
    start: f64,
    end: f64,
}

impl TryFrom<WindowBounds> for Window {
    type Error = SttcError;

    fn try_from(bounds: WindowBounds) -> Result<Self, Self::Error> {
        Window::new(bounds.start, bounds.end)
    }
}

impl TryFrom<&[f64]> for Window {
    type Error = SttcError;

    /// Build a window from a two-element slice `[start, end]`.
    fn try_from(bounds: &[f64]) -> Result<Self, Self::Error> {
        match bounds {
            [start, end] => Window::new(*start, *end),
            _ => Err(SttcError::InvalidWindow(format!(
                "expected exactly two bounds, got {}",
                bounds.len()
            ))),
        }
    }
}
