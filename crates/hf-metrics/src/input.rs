//! Per-evaluation input snapshot.

use crate::raw::{RawSnapshot, ReadingQuantity};
use hf_advisor::AirSample;
use hf_core::Reading;

/// Immutable set of readings presented to the metrics on one evaluation.
///
/// Constructed fresh from the current raw values on every change
/// notification; the engine caches nothing between notifications.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricInput {
    /// Indoor air temperature [°C].
    pub indoor_temp_c: Reading,
    /// Indoor relative humidity [%].
    pub indoor_rel_humidity: Reading,
    /// Outdoor air temperature [°C].
    pub outdoor_temp_c: Reading,
    /// Outdoor relative humidity [%].
    pub outdoor_rel_humidity: Reading,
}

impl MetricInput {
    /// Full snapshot with both sensor pairs.
    pub fn new(
        indoor_temp_c: Reading,
        indoor_rel_humidity: Reading,
        outdoor_temp_c: Reading,
        outdoor_rel_humidity: Reading,
    ) -> Self {
        Self {
            indoor_temp_c,
            indoor_rel_humidity,
            outdoor_temp_c,
            outdoor_rel_humidity,
        }
    }

    /// Indoor-only snapshot; outdoor readings stay absent.
    pub fn indoor(temp_c: Reading, rel_humidity: Reading) -> Self {
        Self {
            indoor_temp_c: temp_c,
            indoor_rel_humidity: rel_humidity,
            ..Self::default()
        }
    }

    /// Parse a raw host snapshot into typed readings.
    pub fn from_raw(raw: &RawSnapshot) -> Self {
        Self {
            indoor_temp_c: raw.indoor_temperature.to_reading(ReadingQuantity::Temperature),
            indoor_rel_humidity: raw
                .indoor_humidity
                .to_reading(ReadingQuantity::RelativeHumidity),
            outdoor_temp_c: raw
                .outdoor_temperature
                .to_reading(ReadingQuantity::Temperature),
            outdoor_rel_humidity: raw
                .outdoor_humidity
                .to_reading(ReadingQuantity::RelativeHumidity),
        }
    }

    /// The indoor side as an advisor sample.
    pub fn indoor_sample(&self) -> AirSample {
        AirSample::new(self.indoor_temp_c, self.indoor_rel_humidity)
    }

    /// The outdoor side as an advisor sample.
    pub fn outdoor_sample(&self) -> AirSample {
        AirSample::new(self.outdoor_temp_c, self.outdoor_rel_humidity)
    }
}
