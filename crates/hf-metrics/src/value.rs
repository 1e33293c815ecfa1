//! Metric output values.

use hf_advisor::VentilationAdvice;
use serde::{Deserialize, Serialize};

/// A single computed metric output.
///
/// Rounded quantities and categorical labels share one type so callers
/// can treat every metric identically; "unavailable" is `Option::None`
/// at the call sites, never a sentinel number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Quantity(f64),
    Advice(VentilationAdvice),
}

impl MetricValue {
    /// Get the numeric value, if this is a quantity.
    pub fn as_quantity(&self) -> Option<f64> {
        match self {
            Self::Quantity(v) => Some(*v),
            Self::Advice(_) => None,
        }
    }

    /// Get the recommendation, if this is an advice label.
    pub fn as_advice(&self) -> Option<VentilationAdvice> {
        match self {
            Self::Quantity(_) => None,
            Self::Advice(a) => Some(*a),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Quantity(value)
    }
}

impl From<VentilationAdvice> for MetricValue {
    fn from(advice: VentilationAdvice) -> Self {
        Self::Advice(advice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let q = MetricValue::Quantity(8.64);
        assert_eq!(q.as_quantity(), Some(8.64));
        assert_eq!(q.as_advice(), None);

        let a = MetricValue::Advice(VentilationAdvice::VentilateNow);
        assert_eq!(a.as_quantity(), None);
        assert_eq!(a.as_advice(), Some(VentilationAdvice::VentilateNow));
    }

    #[test]
    fn serializes_untagged() {
        let q = serde_json::to_string(&MetricValue::Quantity(7.0)).unwrap();
        assert_eq!(q, "7.0");
        let a =
            serde_json::to_string(&MetricValue::Advice(VentilationAdvice::DoNotVentilate)).unwrap();
        assert_eq!(a, "\"do_not_ventilate\"");
    }
}
