//! Error types for metric setup and configuration.
//!
//! Runtime evaluation never errors — a metric that cannot be computed
//! reports `None`. These errors cover the one-time setup path only.

use thiserror::Error;

/// Result type for metric setup operations.
pub type MetricResult<T> = Result<T, MetricError>;

/// Errors that can occur while building a metric engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MetricError {
    /// A sensor binding required by an enabled metric is missing.
    #[error("Missing sensor binding: {role} is required by {metric}")]
    MissingBinding {
        role: &'static str,
        metric: &'static str,
    },

    /// A configured sensor binding is empty.
    #[error("Empty sensor binding for {role}")]
    EmptyBinding { role: &'static str },

    /// The enabled metric set lists a metric twice.
    #[error("Duplicate metric in enabled set: {metric}")]
    DuplicateMetric { metric: &'static str },

    /// An advisor model or policy parameter is invalid.
    #[error(transparent)]
    Advisor(#[from] hf_advisor::AdvisorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MetricError::MissingBinding {
            role: "outdoor_temperature",
            metric: "ventilation_recommendation",
        };
        let msg = err.to_string();
        assert!(msg.contains("outdoor_temperature"));
        assert!(msg.contains("ventilation_recommendation"));
    }

    #[test]
    fn advisor_errors_convert() {
        let source = hf_advisor::AdvisorError::InvalidArg {
            what: "growth_step must be positive",
        };
        let err: MetricError = source.into();
        assert!(matches!(err, MetricError::Advisor(_)));
    }
}
