use std::error::Error;
use std::fmt;

/// Errors raised by the transport context, the checked conversions and the
/// render driver
#[derive(Debug, Clone, PartialEq)]
pub enum ClockError {
    /// No clock instance is live (never initialized, or already released)
    Uninitialized,
    /// Tempo was zero, negative or not finite
    InvalidTempo(f64),
    /// Sample rate was zero, negative or not finite
    InvalidSampleRate(f64),
    /// A render pass was asked to step with zero-sample blocks
    InvalidBlockSize,
    /// Time signature could not be parsed or has a zero term
    InvalidTimeSignature(String),
    /// Settings could not be loaded
    Config(String),
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::Uninitialized => write!(f, "transport clock is not initialized"),
            ClockError::InvalidTempo(bpm) => {
                write!(f, "invalid tempo: {} BPM (must be positive)", bpm)
            }
            ClockError::InvalidSampleRate(rate) => {
                write!(f, "invalid sample rate: {} Hz (must be positive)", rate)
            }
            ClockError::InvalidBlockSize => write!(f, "block size must be at least one sample"),
            ClockError::InvalidTimeSignature(msg) => write!(f, "invalid time signature: {}", msg),
            ClockError::Config(msg) => write!(f, "configuration error: {}", msg),
        }
    }
}

impl Error for ClockError {}

impl From<::config::ConfigError> for ClockError {
    fn from(err: ::config::ConfigError) -> Self {
        ClockError::Config(err.to_string())
    }
}

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, ClockError>;
