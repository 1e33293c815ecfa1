//! Mold risk accumulation model.
//!
//! Integrates sustained warm, damp conditions into a bounded index.
//! The model has no notion of wall-clock time: each call to [`MoldModel::step`]
//! is one discrete step, so the caller's evaluation cadence sets the
//! effective time constant. A host that evaluates twice as often moves
//! the index twice as fast — this coupling is part of the contract.

use crate::error::{AdvisorError, AdvisorResult};
use hf_core::{round_to, Reading, Real};
use serde::{Deserialize, Serialize};

/// Mold growth model parameters.
///
/// Growth is deliberately faster than decay: risk accumulates 2.5× faster
/// than it clears under the default rates, a conservative bias.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoldModel {
    /// Relative humidity [%] above which conditions favor growth.
    pub humidity_threshold_pct: Real,
    /// Temperature [°C] above which conditions favor growth.
    pub temperature_threshold_c: Real,
    /// Index increase per favorable step.
    pub growth_step: Real,
    /// Index decrease per unfavorable step.
    pub decay_step: Real,
    /// Upper bound of the index scale. The lower bound is always zero.
    pub max_index: Real,
}

impl Default for MoldModel {
    fn default() -> Self {
        Self {
            humidity_threshold_pct: 70.0,
            temperature_threshold_c: 15.0,
            growth_step: 0.05,
            decay_step: 0.02,
            max_index: 6.0,
        }
    }
}

impl MoldModel {
    /// Create a model with explicit parameters.
    pub fn new(
        humidity_threshold_pct: Real,
        temperature_threshold_c: Real,
        growth_step: Real,
        decay_step: Real,
        max_index: Real,
    ) -> AdvisorResult<Self> {
        if !humidity_threshold_pct.is_finite() || !temperature_threshold_c.is_finite() {
            return Err(AdvisorError::InvalidArg {
                what: "thresholds must be finite",
            });
        }
        if !growth_step.is_finite() || growth_step <= 0.0 {
            return Err(AdvisorError::InvalidArg {
                what: "growth_step must be positive",
            });
        }
        if !decay_step.is_finite() || decay_step <= 0.0 {
            return Err(AdvisorError::InvalidArg {
                what: "decay_step must be positive",
            });
        }
        if !max_index.is_finite() || max_index <= 0.0 {
            return Err(AdvisorError::InvalidArg {
                what: "max_index must be positive",
            });
        }
        Ok(Self {
            humidity_threshold_pct,
            temperature_threshold_c,
            growth_step,
            decay_step,
            max_index,
        })
    }

    /// Advance the index by one discrete step.
    ///
    /// An absent temperature or humidity produces no output and returns
    /// the state unchanged — sensor dropouts neither grow nor decay the
    /// index. Otherwise the index moves by exactly one step, clamped to
    /// `[0, max_index]`, and the rounded value is reported.
    pub fn step(
        &self,
        state: MoldRiskState,
        temp_c: Reading,
        rel_humidity: Reading,
    ) -> (MoldRiskState, Reading) {
        let (Some(t), Some(rh)) = (temp_c, rel_humidity) else {
            return (state, None);
        };

        let index = if rh > self.humidity_threshold_pct && t > self.temperature_threshold_c {
            (state.index + self.growth_step).min(self.max_index)
        } else {
            (state.index - self.decay_step).max(0.0)
        };

        (MoldRiskState { index }, Some(round_to(index, 2)))
    }
}

/// Accumulated mold risk for one monitored space.
///
/// Owned by whoever drives the evaluations for the accumulator's
/// lifetime; there is no external reset. The raw index is read-only from
/// the outside — only [`MoldModel::step`] produces successor states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoldRiskState {
    index: Real,
}

impl MoldRiskState {
    /// Fresh state at zero risk.
    pub fn new() -> Self {
        Self { index: 0.0 }
    }

    /// Current unrounded index value.
    pub fn index(&self) -> Real {
        self.index
    }
}

impl Default for MoldRiskState {
    fn default() -> Self {
        Self::new()
    }
}
