//! Ventilation guidance from indoor/outdoor humidity comparison.
//!
//! Opening windows only helps when outdoor air carries less water per
//! cubic meter than indoor air, regardless of how the relative
//! percentages compare. Both outputs therefore compare absolute humidity
//! on the two sides of the building envelope.

use crate::error::{AdvisorError, AdvisorResult};
use hf_core::{Reading, Real};
use hf_psychro::absolute_humidity;
use serde::{Deserialize, Serialize};

/// Ventilation recommendation labels.
///
/// A closed set: the host maps these onto whatever presentation it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VentilationAdvice {
    VentilateNow,
    DoNotVentilate,
}

impl VentilationAdvice {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VentilateNow => "ventilate_now",
            Self::DoNotVentilate => "do_not_ventilate",
        }
    }
}

/// One side of the envelope: paired temperature and humidity readings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AirSample {
    /// Air temperature [°C].
    pub temp_c: Reading,
    /// Relative humidity [%].
    pub rel_humidity: Reading,
}

impl AirSample {
    pub fn new(temp_c: Reading, rel_humidity: Reading) -> Self {
        Self {
            temp_c,
            rel_humidity,
        }
    }

    /// Absolute humidity [g/m³] of this sample, when both readings are
    /// present.
    pub fn absolute_humidity(&self) -> Reading {
        absolute_humidity(self.temp_c, self.rel_humidity)
    }
}

/// Ventilation policy parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VentilationPolicy {
    /// Fixed airing baseline [min] applied whenever ventilation helps.
    pub base_duration_min: Real,
    /// Additional minutes per g/m³ of indoor-outdoor humidity differential.
    pub minutes_per_gram: Real,
}

impl Default for VentilationPolicy {
    fn default() -> Self {
        Self {
            base_duration_min: 5.0,
            minutes_per_gram: 0.5,
        }
    }
}

impl VentilationPolicy {
    /// Create a policy with explicit parameters.
    pub fn new(base_duration_min: Real, minutes_per_gram: Real) -> AdvisorResult<Self> {
        if !base_duration_min.is_finite() || base_duration_min < 0.0 {
            return Err(AdvisorError::InvalidArg {
                what: "base_duration_min must be finite and non-negative",
            });
        }
        if !minutes_per_gram.is_finite() || minutes_per_gram < 0.0 {
            return Err(AdvisorError::InvalidArg {
                what: "minutes_per_gram must be finite and non-negative",
            });
        }
        Ok(Self {
            base_duration_min,
            minutes_per_gram,
        })
    }

    /// Recommendation from current indoor and outdoor samples.
    ///
    /// `None` when any of the four readings is absent. Equal absolute
    /// humidity on both sides resolves to `DoNotVentilate`.
    pub fn recommendation(
        &self,
        indoor: AirSample,
        outdoor: AirSample,
    ) -> Option<VentilationAdvice> {
        let ah_in = indoor.absolute_humidity()?;
        let ah_out = outdoor.absolute_humidity()?;
        if ah_out < ah_in {
            Some(VentilationAdvice::VentilateNow)
        } else {
            Some(VentilationAdvice::DoNotVentilate)
        }
    }

    /// Estimated airing duration [min], rounded to whole minutes.
    ///
    /// `None` when any of the four readings is absent; `0.0` when
    /// ventilation brings no benefit.
    pub fn duration_min(&self, indoor: AirSample, outdoor: AirSample) -> Reading {
        let ah_in = indoor.absolute_humidity()?;
        let ah_out = outdoor.absolute_humidity()?;
        Some(self.duration_for_delta(ah_in - ah_out))
    }

    /// Duration [min] for a given humidity differential [g/m³].
    ///
    /// Non-positive differentials floor at zero. The estimate is uncapped:
    /// large differentials produce proportionally long durations.
    pub fn duration_for_delta(&self, delta: Real) -> Real {
        if delta <= 0.0 {
            return 0.0;
        }
        (self.base_duration_min + self.minutes_per_gram * delta).round()
    }
}
