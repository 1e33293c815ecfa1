//! Error types for advisor configuration.

use thiserror::Error;

/// Result type for advisor operations.
pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// Errors that can occur when configuring an advisor.
///
/// Runtime evaluation never errors: absent inputs yield absent outputs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdvisorError {
    /// Invalid argument provided to an advisor constructor.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AdvisorError::InvalidArg {
            what: "growth_step must be positive",
        };
        assert!(err.to_string().contains("growth_step"));
    }
}
