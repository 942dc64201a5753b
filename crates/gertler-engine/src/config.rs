//! Engine configuration.

use std::f64::consts::PI;
use std::path::Path;

use gertler_core::traits::Validate;
use gertler_core::{GertlerError, Result, Tolerance};
use gertler_geometry::revolve::MIN_ANGLE_STEP_DEG;
use serde::{Deserialize, Serialize};

/// How the number of gores around the circumference is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GorePolicy {
    /// Always use this many gores.
    Fixed { count: u32 },
    /// Use as many gores as fabric panels of this width (m) are needed to
    /// wrap the maximum circumference: `ceil(π·D / panel_width)`.
    FromCircumference { panel_width: f64 },
}

impl GorePolicy {
    pub const DEFAULT_PANEL_WIDTH: f64 = 0.8;

    /// Resolve the gore count for a body of maximum diameter `diameter`.
    pub fn gore_count(&self, diameter: f64) -> Result<u32> {
        match *self {
            GorePolicy::Fixed { count } => Ok(count),
            GorePolicy::FromCircumference { panel_width } => {
                let count = (PI * diameter / panel_width).ceil();
                if !count.is_finite() || count < 1.0 || count > u32::MAX as f64 {
                    return Err(GertlerError::Domain(format!(
                        "gore count {} from diameter {} and panel width {} is out of range",
                        count, diameter, panel_width
                    )));
                }
                Ok(count as u32)
            }
        }
    }
}

impl Default for GorePolicy {
    fn default() -> Self {
        GorePolicy::FromCircumference {
            panel_width: Self::DEFAULT_PANEL_WIDTH,
        }
    }
}

/// Tunables of the recompute pipeline. Missing JSON fields take defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tolerance: Tolerance,
    pub gore_policy: GorePolicy,
    /// Upper bound on the sample count `n`.
    pub max_samples: usize,
    /// Cost per metre of gore seam length.
    pub unit_cost: f64,
    /// Gore length is rounded up to a multiple of this before costing, m.
    pub cost_length_step: f64,
    /// Angular spacing of the hull mesh rings, degrees.
    pub hull_angle_step_deg: f64,
}

impl EngineConfig {
    pub const DEFAULT_MAX_SAMPLES: usize = 500;
    pub const DEFAULT_UNIT_COST: f64 = 11.0;
    pub const DEFAULT_COST_LENGTH_STEP: f64 = 10.0;
    pub const DEFAULT_HULL_ANGLE_STEP_DEG: f64 = 5.0;

    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GertlerError::Report(format!("invalid engine config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            gore_policy: GorePolicy::default(),
            max_samples: Self::DEFAULT_MAX_SAMPLES,
            unit_cost: Self::DEFAULT_UNIT_COST,
            cost_length_step: Self::DEFAULT_COST_LENGTH_STEP,
            hull_angle_step_deg: Self::DEFAULT_HULL_ANGLE_STEP_DEG,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<()> {
        if !(self.tolerance.snap.is_finite() && self.tolerance.snap >= 0.0) {
            return Err(GertlerError::Config(format!(
                "snap tolerance must be a non-negative number, got {}",
                self.tolerance.snap
            )));
        }
        match self.gore_policy {
            GorePolicy::Fixed { count } if count == 0 => {
                return Err(GertlerError::Config("fixed gore count must be at least 1".into()));
            }
            GorePolicy::FromCircumference { panel_width }
                if !(panel_width.is_finite() && panel_width > 0.0) =>
            {
                return Err(GertlerError::Config(format!(
                    "gore panel width must be positive, got {}",
                    panel_width
                )));
            }
            _ => {}
        }
        if self.max_samples < 2 {
            return Err(GertlerError::Config(format!(
                "max_samples must be at least 2, got {}",
                self.max_samples
            )));
        }
        if !(self.unit_cost.is_finite() && self.unit_cost > 0.0) {
            return Err(GertlerError::Config(format!(
                "unit cost must be positive, got {}",
                self.unit_cost
            )));
        }
        if !(self.cost_length_step.is_finite() && self.cost_length_step > 0.0) {
            return Err(GertlerError::Config(format!(
                "cost length step must be positive, got {}",
                self.cost_length_step
            )));
        }
        if !(self.hull_angle_step_deg >= MIN_ANGLE_STEP_DEG && self.hull_angle_step_deg <= 180.0) {
            return Err(GertlerError::Config(format!(
                "hull angle step must lie in [{}, 180] degrees, got {}",
                MIN_ANGLE_STEP_DEG, self.hull_angle_step_deg
            )));
        }
        Ok(())
    }
}
