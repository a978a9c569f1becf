//! Error types for the contact book assistant.
//!
//! Domain validation errors live in `domain::errors`; this module holds the
//! errors of the layers around the core.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors a single assistant command can fail with.
///
/// These never end the session; the assistant renders them as
/// `Error: <message>` and waits for the next command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Too few arguments were given for the command
    #[error("Give me {usage} please.")]
    MissingArguments { usage: &'static str },

    /// An argument failed domain validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_WINDOW_DAYS: Must be a number"
        );

        let err = CommandError::MissingArguments {
            usage: "name and phone",
        };
        assert_eq!(err.to_string(), "Give me name and phone please.");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: CommandError = ValidationError::InvalidPhone("1".to_string()).into();
        assert_eq!(err.to_string(), "Phone number must be 10 digits");
    }
}
