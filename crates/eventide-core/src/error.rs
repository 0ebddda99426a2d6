use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid range: end {end} precedes start {start}")]
    InvalidRange { start: String, end: String },

    #[error("Date arithmetic out of range: {0}")]
    OutOfRange(String),
}

impl CoreError {
    /// ## Summary
    /// Builds a [`CoreError::InvalidRange`] from any pair of displayable bounds.
    #[must_use]
    pub fn invalid_range(start: impl std::fmt::Display, end: impl std::fmt::Display) -> Self {
        Self::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
