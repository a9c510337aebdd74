//! Error types for PassGen.
//!
//! The generation core has exactly one failure mode. Everything else here
//! belongs to the boundary (clipboard, settings) and is recovered there.

use thiserror::Error;

/// Failure of the password-composition core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// All four character-class toggles were off.
    #[error("no character class selected")]
    NoClassSelected,
}

/// Failure to hand the current result to a clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// There is no generated password to copy yet.
    #[error("nothing to copy")]
    NothingToCopy,

    #[error("clipboard error: {0}")]
    Backend(String),
}

/// Failure to read the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for generation
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;
