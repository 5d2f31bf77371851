//! Crate-level error types.

use std::fmt;

/// Errors produced by the povcam crate.
#[derive(Debug)]
pub enum PovError {
    /// Host supplied a pitch outside `[0, 512)`.
    PitchOutOfRange(i32),
    /// Host supplied a yaw outside `[0, 2048)`.
    YawOutOfRange(i32),
    /// The camera session was deactivated and cannot be re-entered.
    SessionEnded,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for PovError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PitchOutOfRange(v) => {
                write!(f, "pitch {v} outside [0, 512)")
            }
            Self::YawOutOfRange(v) => write!(f, "yaw {v} outside [0, 2048)"),
            Self::SessionEnded => write!(f, "camera session already ended"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for PovError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PovError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
