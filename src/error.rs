//! Error module for the Rusty STTC library.
use std::error::Error;
use std::fmt;

/// Error types for the library.
#[derive(Debug, PartialEq)]
pub enum SttcError {
    /// Error for an invalid analysis window, e.g., end before start or wrong number of bounds.
    InvalidWindow(String),
    /// Error for an invalid maximum delta-t, e.g., negative or not finite.
    InvalidDeltaT(String),
    /// Error for invalid spike times, e.g., NaN values.
    InvalidSpikeTimes(String),
}

impl fmt::Display for SttcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SttcError::InvalidWindow(e) => write!(f, "Invalid analysis window: {}", e),
            SttcError::InvalidDeltaT(e) => write!(f, "Invalid delta-t: {}", e),
            SttcError::InvalidSpikeTimes(e) => write!(f, "Invalid spike times: {}", e),
        }
    }
}

impl Error for SttcError {}
