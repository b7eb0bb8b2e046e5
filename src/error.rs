//! Crate-level error types.
//!
//! The animation core itself is infallible; only loading and saving
//! option presets can fail.

use std::fmt;

/// Errors produced by the holocard crate.
#[derive(Debug)]
pub enum CardError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Browser host setup failure (missing window, document or element).
    Host(String),
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Host(msg) => write!(f, "host error: {msg}"),
        }
    }
}

impl std::error::Error for CardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CardError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
