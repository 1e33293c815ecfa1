//! Metric evaluation engine.
//!
//! One engine per monitored space. The host calls [`MetricEngine::evaluate`]
//! once per change notification with a fresh input snapshot; the engine
//! computes every enabled metric and returns the results in a uniform
//! shape. Evaluations are synchronous, non-blocking, and free of I/O.
//!
//! The only mutable state is the mold risk index. `evaluate` takes
//! `&mut self`, so the one-evaluation-at-a-time discipline the
//! accumulator needs is enforced by the borrow checker; callers that
//! share an engine across threads wrap it in a mutex.

use crate::binding::{validate_config, EngineConfig};
use crate::error::MetricResult;
use crate::input::MetricInput;
use crate::kind::MetricKind;
use crate::value::MetricValue;
use hf_advisor::{MoldModel, MoldRiskState, VentilationPolicy};
use hf_core::Real;
use hf_psychro::{absolute_humidity, dew_point, moist_air_enthalpy};
use serde::Serialize;

/// One metric's outcome for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricReport {
    pub kind: MetricKind,
    /// Computed value, or `None` when the metric is unavailable.
    pub value: Option<MetricValue>,
    /// Fixed unit assignment of the metric, for presentation.
    pub unit: Option<&'static str>,
}

/// Evaluates the enabled metrics and owns the mold risk state.
#[derive(Debug, Clone)]
pub struct MetricEngine {
    enabled: Vec<MetricKind>,
    ventilation: VentilationPolicy,
    mold_model: MoldModel,
    mold_state: MoldRiskState,
}

impl MetricEngine {
    /// Build an engine from a validated configuration.
    pub fn new(config: &EngineConfig) -> MetricResult<Self> {
        validate_config(config)?;
        Ok(Self {
            enabled: config.enabled_metrics.clone(),
            ventilation: config.ventilation_policy,
            mold_model: config.mold_model,
            mold_state: MoldRiskState::new(),
        })
    }

    /// Build an engine with default models for a fixed metric set.
    ///
    /// Library-embedding convenience; no binding validation happens.
    pub fn with_metrics(metrics: &[MetricKind]) -> Self {
        Self {
            enabled: metrics.to_vec(),
            ventilation: VentilationPolicy::default(),
            mold_model: MoldModel::default(),
            mold_state: MoldRiskState::new(),
        }
    }

    /// The metrics this engine evaluates, in report order.
    pub fn enabled(&self) -> &[MetricKind] {
        &self.enabled
    }

    /// Current unrounded mold index, without advancing the accumulator.
    pub fn mold_index(&self) -> Real {
        self.mold_state.index()
    }

    /// Evaluate every enabled metric against one input snapshot.
    ///
    /// Metrics evaluate independently: one metric's missing inputs never
    /// suppress another's result. The mold accumulator advances by
    /// exactly one step per call (and not at all when its inputs are
    /// absent).
    pub fn evaluate(&mut self, input: &MetricInput) -> Vec<MetricReport> {
        let kinds = self.enabled.clone();
        kinds
            .into_iter()
            .map(|kind| MetricReport {
                kind,
                value: self.evaluate_metric(kind, input),
                unit: kind.unit(),
            })
            .collect()
    }

    /// Evaluate a single metric against one input snapshot.
    pub fn evaluate_metric(&mut self, kind: MetricKind, input: &MetricInput) -> Option<MetricValue> {
        match kind {
            MetricKind::AbsoluteHumidity => {
                absolute_humidity(input.indoor_temp_c, input.indoor_rel_humidity)
                    .map(MetricValue::Quantity)
            }
            MetricKind::DewPoint => {
                dew_point(input.indoor_temp_c, input.indoor_rel_humidity).map(MetricValue::Quantity)
            }
            MetricKind::Enthalpy => {
                moist_air_enthalpy(input.indoor_temp_c, input.indoor_rel_humidity)
                    .map(MetricValue::Quantity)
            }
            MetricKind::MoldIndex => {
                let (next, out) = self.mold_model.step(
                    self.mold_state,
                    input.indoor_temp_c,
                    input.indoor_rel_humidity,
                );
                self.mold_state = next;
                out.map(MetricValue::Quantity)
            }
            MetricKind::VentilationRecommendation => self
                .ventilation
                .recommendation(input.indoor_sample(), input.outdoor_sample())
                .map(MetricValue::Advice),
            MetricKind::VentilationDuration => self
                .ventilation
                .duration_min(input.indoor_sample(), input.outdoor_sample())
                .map(MetricValue::Quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_follow_enabled_order() {
        let mut engine =
            MetricEngine::with_metrics(&[MetricKind::DewPoint, MetricKind::AbsoluteHumidity]);
        let reports = engine.evaluate(&MetricInput::indoor(Some(20.0), Some(50.0)));
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].kind, MetricKind::DewPoint);
        assert_eq!(reports[1].kind, MetricKind::AbsoluteHumidity);
        assert_eq!(reports[1].unit, Some("g/m³"));
    }

    #[test]
    fn mold_index_advances_once_per_evaluation() {
        let mut engine = MetricEngine::with_metrics(&[MetricKind::MoldIndex]);
        let humid = MetricInput::indoor(Some(20.0), Some(80.0));
        let first = engine.evaluate(&humid)[0].value.unwrap().as_quantity();
        let second = engine.evaluate(&humid)[0].value.unwrap().as_quantity();
        assert_eq!(first, Some(0.05));
        assert_eq!(second, Some(0.1));
    }

    #[test]
    fn mold_state_survives_dropouts() {
        let mut engine = MetricEngine::with_metrics(&[MetricKind::MoldIndex]);
        let humid = MetricInput::indoor(Some(20.0), Some(80.0));
        engine.evaluate(&humid);
        let before = engine.mold_index();

        let report = &engine.evaluate(&MetricInput::indoor(None, Some(80.0)))[0];
        assert_eq!(report.value, None);
        assert_eq!(engine.mold_index(), before);
    }
}
