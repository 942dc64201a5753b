//! Whole-body figures reduced from the pattern points.

use std::f64::consts::PI;

use gertler_geometry::{pattern, BodyDimensions, PatternPoint};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;

/// Grams per kilogram; `rhoS` is given in g/m².
const GRAMS_PER_KG: f64 = 1000.0;

/// Performance and material figures of one design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Fabric mass, kg.
    pub envelope_weight: f64,
    /// Volume less envelope weight, at 1 kg of net lift per m³.
    pub lift_capacity: f64,
    /// Developed area over the lateral area of the circumscribing cylinder.
    pub surface_coefficient: f64,
    /// Developed gore area summed over all gores, m².
    pub surface_area: f64,
    /// Volume of the stacked truncated cones, m³.
    pub integrated_volume: f64,
    /// Number of gores around the circumference.
    pub gore_count: u32,
    /// Material cost estimate.
    pub cost: f64,
    /// Surface of the circumscribing capped cylinder, m².
    pub reference_surface: f64,
}

/// Reduce `points` to the design summary.
pub fn summarize(
    points: &[PatternPoint],
    dims: &BodyDimensions,
    rho_s: f64,
    gore_count: u32,
    config: &EngineConfig,
) -> Summary {
    let surface_area = pattern::surface_area(points);
    let integrated_volume = pattern::integrated_volume(points);
    let envelope_weight = surface_area * rho_s / GRAMS_PER_KG;
    let gore_length = points.last().map_or(0.0, |p| p.cumulative_s);

    Summary {
        envelope_weight,
        lift_capacity: dims.volume - envelope_weight,
        surface_coefficient: surface_area / (dims.length * PI * dims.diameter),
        surface_area,
        integrated_volume,
        gore_count,
        cost: material_cost(gore_length, gore_count, config),
        reference_surface: 2.0 * PI * (dims.diameter / 2.0).powi(2)
            + PI * dims.diameter * dims.length,
    }
}

/// Gore length rounded up to the configured step, times gore count and unit cost.
pub fn material_cost(gore_length: f64, gore_count: u32, config: &EngineConfig) -> f64 {
    let step = config.cost_length_step;
    let billed = (gore_length / step).ceil() * step;
    billed * gore_count as f64 * config.unit_cost
}

impl Summary {
    pub fn is_finite(&self) -> bool {
        [
            self.envelope_weight,
            self.lift_capacity,
            self.surface_coefficient,
            self.surface_area,
            self.integrated_volume,
            self.cost,
            self.reference_surface,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
