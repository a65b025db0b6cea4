//! Unified error type for the ledbar-lib crate.
//!
//! [`LedbarError`] wraps the module-specific [`BusError`] and
//! domain-specific error kinds (`Range`, `Color`, `Config`). `From` impls
//! allow `?` to propagate across module boundaries seamlessly.

use std::fmt;

use crate::bus::BusError;
use crate::protocol::NUM_LEDS;

/// Unified error type for ledbar-lib operations.
#[derive(Debug)]
pub enum LedbarError {
    /// Bus transport error (open, frame write).
    Bus(BusError),
    /// LED index outside the bar.
    Range(usize),
    /// Color parsing error.
    Color(String),
    /// On/off mask parsing error.
    Pattern(String),
    /// Configuration error.
    Config(String),
    /// Standard I/O error (config persistence).
    Io(std::io::Error),
}

impl fmt::Display for LedbarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedbarError::Bus(e) => write!(f, "{e}"),
            LedbarError::Range(index) => {
                write!(f, "LED index {index} out of range (0-{})", NUM_LEDS - 1)
            }
            LedbarError::Color(e) => write!(f, "Color error: {e}"),
            LedbarError::Pattern(e) => write!(f, "Pattern error: {e}"),
            LedbarError::Config(e) => write!(f, "Config error: {e}"),
            LedbarError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for LedbarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LedbarError::Bus(e) => Some(e),
            LedbarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BusError> for LedbarError {
    fn from(e: BusError) -> Self {
        LedbarError::Bus(e)
    }
}

impl From<std::io::Error> for LedbarError {
    fn from(e: std::io::Error) -> Self {
        LedbarError::Io(e)
    }
}

/// Crate-level Result alias using [`LedbarError`].
pub type Result<T> = std::result::Result<T, LedbarError>;
