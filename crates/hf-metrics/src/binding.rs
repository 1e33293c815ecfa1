//! Sensor binding configuration.
//!
//! Binds external sensor identifiers to the roles the engine consumes
//! and selects the enabled metric set. The binding is supplied once at
//! setup and validated there; the engine does not revalidate it on each
//! evaluation.

use crate::error::{MetricError, MetricResult};
use crate::kind::MetricKind;
use hf_advisor::{MoldModel, VentilationPolicy};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sensor roles the engine consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorRole {
    IndoorTemperature,
    IndoorHumidity,
    OutdoorTemperature,
    OutdoorHumidity,
}

impl SensorRole {
    pub fn key(self) -> &'static str {
        match self {
            Self::IndoorTemperature => "indoor_temperature",
            Self::IndoorHumidity => "indoor_humidity",
            Self::OutdoorTemperature => "outdoor_temperature",
            Self::OutdoorHumidity => "outdoor_humidity",
        }
    }
}

/// Engine configuration: role bindings plus the enabled metric set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// External identifier of the indoor temperature sensor.
    pub indoor_temperature_sensor: String,
    /// External identifier of the indoor humidity sensor.
    pub indoor_humidity_sensor: String,
    /// External identifier of the outdoor temperature sensor, when one
    /// exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outdoor_temperature_sensor: Option<String>,
    /// External identifier of the outdoor humidity sensor, when one
    /// exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outdoor_humidity_sensor: Option<String>,
    /// Metrics to evaluate.
    #[serde(default = "default_enabled_metrics")]
    pub enabled_metrics: Vec<MetricKind>,
    /// Mold model overrides.
    #[serde(default)]
    pub mold_model: MoldModel,
    /// Ventilation policy overrides.
    #[serde(default)]
    pub ventilation_policy: VentilationPolicy,
}

fn default_enabled_metrics() -> Vec<MetricKind> {
    MetricKind::ALL.to_vec()
}

impl EngineConfig {
    /// Minimal indoor-only configuration with the indoor metrics enabled.
    pub fn indoor_only(
        indoor_temperature_sensor: impl Into<String>,
        indoor_humidity_sensor: impl Into<String>,
    ) -> Self {
        Self {
            indoor_temperature_sensor: indoor_temperature_sensor.into(),
            indoor_humidity_sensor: indoor_humidity_sensor.into(),
            outdoor_temperature_sensor: None,
            outdoor_humidity_sensor: None,
            enabled_metrics: MetricKind::ALL
                .into_iter()
                .filter(|k| !k.requires_outdoor())
                .collect(),
            mold_model: MoldModel::default(),
            ventilation_policy: VentilationPolicy::default(),
        }
    }

    /// The bound sensor identifier for a role, when configured.
    pub fn sensor_for(&self, role: SensorRole) -> Option<&str> {
        match role {
            SensorRole::IndoorTemperature => Some(self.indoor_temperature_sensor.as_str()),
            SensorRole::IndoorHumidity => Some(self.indoor_humidity_sensor.as_str()),
            SensorRole::OutdoorTemperature => self.outdoor_temperature_sensor.as_deref(),
            SensorRole::OutdoorHumidity => self.outdoor_humidity_sensor.as_deref(),
        }
    }
}

/// Validate a configuration before building an engine from it.
pub fn validate_config(config: &EngineConfig) -> MetricResult<()> {
    if config.indoor_temperature_sensor.trim().is_empty() {
        return Err(MetricError::EmptyBinding {
            role: SensorRole::IndoorTemperature.key(),
        });
    }
    if config.indoor_humidity_sensor.trim().is_empty() {
        return Err(MetricError::EmptyBinding {
            role: SensorRole::IndoorHumidity.key(),
        });
    }
    if matches!(&config.outdoor_temperature_sensor, Some(s) if s.trim().is_empty()) {
        return Err(MetricError::EmptyBinding {
            role: SensorRole::OutdoorTemperature.key(),
        });
    }
    if matches!(&config.outdoor_humidity_sensor, Some(s) if s.trim().is_empty()) {
        return Err(MetricError::EmptyBinding {
            role: SensorRole::OutdoorHumidity.key(),
        });
    }

    let mut seen = HashSet::new();
    for kind in &config.enabled_metrics {
        if !seen.insert(*kind) {
            return Err(MetricError::DuplicateMetric { metric: kind.key() });
        }
        if kind.requires_outdoor() {
            if config.outdoor_temperature_sensor.is_none() {
                return Err(MetricError::MissingBinding {
                    role: SensorRole::OutdoorTemperature.key(),
                    metric: kind.key(),
                });
            }
            if config.outdoor_humidity_sensor.is_none() {
                return Err(MetricError::MissingBinding {
                    role: SensorRole::OutdoorHumidity.key(),
                    metric: kind.key(),
                });
            }
        }
    }

    // Re-run the advisor constructors so a hand-edited config gets the
    // same checks as a programmatic one.
    MoldModel::new(
        config.mold_model.humidity_threshold_pct,
        config.mold_model.temperature_threshold_c,
        config.mold_model.growth_step,
        config.mold_model.decay_step,
        config.mold_model.max_index,
    )?;
    VentilationPolicy::new(
        config.ventilation_policy.base_duration_min,
        config.ventilation_policy.minutes_per_gram,
    )?;

    Ok(())
}
