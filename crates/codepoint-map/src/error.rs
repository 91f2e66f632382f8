//! Error types for codepoint maps

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodepointMapError {
    #[error("unknown preset '{0}' (expected one of: None, Hans, Hant, Hans2Hant, Hant2Hans)")]
    UnknownPreset(String),

    #[error("line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },

    #[error("codepoint {0:#x} is outside the Unicode range")]
    OutOfRange(u32),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CodepointMapError>;
