//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur while constructing a domain value object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten decimal digits.
    #[error("Phone number must be 10 digits")]
    InvalidPhone(String),

    /// The provided birthday is not a calendar date in `DD.MM.YYYY` form.
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday(String),
}

impl ValidationError {
    /// The raw input that failed validation.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidPhone(raw) | Self::InvalidBirthday(raw) => raw,
        }
    }
}
