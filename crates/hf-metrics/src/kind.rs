//! Metric kinds and their unit contracts.

use serde::{Deserialize, Serialize};

/// Closed set of derived climate metrics.
///
/// Each kind carries its own evaluation path and a fixed
/// unit-of-measurement assignment; results themselves stay unit-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    AbsoluteHumidity,
    DewPoint,
    Enthalpy,
    MoldIndex,
    VentilationRecommendation,
    VentilationDuration,
}

impl MetricKind {
    /// Every metric kind, in display order.
    pub const ALL: [MetricKind; 6] = [
        Self::AbsoluteHumidity,
        Self::DewPoint,
        Self::Enthalpy,
        Self::MoldIndex,
        Self::VentilationRecommendation,
        Self::VentilationDuration,
    ];

    /// Human-readable metric name.
    pub fn label(self) -> &'static str {
        match self {
            Self::AbsoluteHumidity => "Absolute Humidity",
            Self::DewPoint => "Dew Point",
            Self::Enthalpy => "Enthalpy",
            Self::MoldIndex => "Mold Index",
            Self::VentilationRecommendation => "Ventilation Recommendation",
            Self::VentilationDuration => "Ventilation Duration",
        }
    }

    /// Stable identifier, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            Self::AbsoluteHumidity => "absolute_humidity",
            Self::DewPoint => "dew_point",
            Self::Enthalpy => "enthalpy",
            Self::MoldIndex => "mold_index",
            Self::VentilationRecommendation => "ventilation_recommendation",
            Self::VentilationDuration => "ventilation_duration",
        }
    }

    /// Unit of measurement for numeric outputs.
    ///
    /// The mold index is a dimensionless 0-6 scale and the recommendation
    /// is a label; both carry no unit.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Self::AbsoluteHumidity => Some("g/m³"),
            Self::DewPoint => Some("°C"),
            Self::Enthalpy => Some("kJ/kg"),
            Self::MoldIndex => None,
            Self::VentilationRecommendation => None,
            Self::VentilationDuration => Some("min"),
        }
    }

    /// Whether the metric needs the outdoor sensor pair in addition to
    /// the indoor one.
    pub fn requires_outdoor(self) -> bool {
        matches!(
            self,
            Self::VentilationRecommendation | Self::VentilationDuration
        )
    }

    /// Whether repeated evaluation with identical inputs can yield
    /// different output. Only the mold index accumulates state.
    pub fn is_stateful(self) -> bool {
        matches!(self, Self::MoldIndex)
    }
}
