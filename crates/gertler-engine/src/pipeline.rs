//! The recompute pipeline.
//!
//! Inputs → coefficients → profile samples → pattern points → summary.
//! Each stage only reads the output of the stage before it, and any stage
//! that fails aborts the whole computation.

use gertler_core::traits::Validate;
use gertler_core::{GertlerError, Result};
use gertler_geometry::profile::sample_profile;
use gertler_geometry::revolve::hull_mesh;
use gertler_geometry::{pattern, BodyDimensions, Coefficients, HullMesh, PatternPoint};
use gertler_math::{Aabb2, Point2};
use serde::{Deserialize, Serialize};

use crate::aggregate::{summarize, Summary};
use crate::config::EngineConfig;
use crate::inputs::Inputs;

/// Margin added around the plotted profile and gore, as a fraction of their extent.
pub const CHART_PADDING: f64 = 0.3;

/// Complete result of one computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedState {
    pub coefficients: Coefficients,
    pub dimensions: BodyDimensions,
    pub pattern_points: Vec<PatternPoint>,
    pub summary: Summary,
}

/// Compute the derived state with the default configuration.
pub fn compute(inputs: &Inputs) -> Result<DerivedState> {
    compute_with(inputs, &EngineConfig::default())
}

/// Compute the derived state for `inputs` under `config`.
///
/// Deterministic and free of side effects: equal arguments give bit-identical
/// results.
pub fn compute_with(inputs: &Inputs, config: &EngineConfig) -> Result<DerivedState> {
    config.validate()?;
    inputs.validate()?;
    if inputs.n > config.max_samples {
        return Err(GertlerError::domain(
            "n",
            inputs.n,
            &format!("exceeds the sample ceiling of {}", config.max_samples),
        ));
    }

    let coefficients = Coefficients::solve(&inputs.shape())?;

    let dimensions = BodyDimensions::new(inputs.vb, inputs.l2d, inputs.cp, &coefficients);
    if !dimensions.is_finite() {
        return Err(GertlerError::Domain(format!(
            "body dimensions are not finite: {:?}",
            dimensions
        )));
    }

    let gore_count = config.gore_policy.gore_count(dimensions.diameter)?;
    let samples = sample_profile(&coefficients, inputs.n, config.tolerance)?;
    let pattern_points = pattern::generate(
        &samples,
        dimensions.length,
        dimensions.diameter,
        gore_count,
    )?;

    let summary = summarize(&pattern_points, &dimensions, inputs.rho_s, gore_count, config);
    if !summary.is_finite() {
        return Err(GertlerError::Domain(format!(
            "summary is not finite: {:?}",
            summary
        )));
    }

    Ok(DerivedState {
        coefficients,
        dimensions,
        pattern_points,
        summary,
    })
}

impl DerivedState {
    /// Side-view extent of the envelope, `(x, ±r)`.
    pub fn profile_bounds(&self) -> Option<Aabb2> {
        Aabb2::from_points(
            self.pattern_points
                .iter()
                .flat_map(|p| [Point2::new(p.x, p.r), Point2::new(p.x, p.nr)]),
        )
    }

    /// Extent of one flattened gore, `(xP, ±yP)`.
    pub fn gore_bounds(&self) -> Option<Aabb2> {
        Aabb2::from_points(
            self.pattern_points
                .iter()
                .flat_map(|p| [Point2::new(p.x_p, p.y_p), Point2::new(p.x_p, p.ny_p)]),
        )
    }

    /// Plot domains for the side view and the gore, padded by [`CHART_PADDING`].
    pub fn chart_domains(&self) -> Option<(Aabb2, Aabb2)> {
        let profile = self.profile_bounds()?.padded(CHART_PADDING);
        let gore = self.gore_bounds()?.padded(CHART_PADDING);
        Some((profile, gore))
    }

    /// Hull mesh centered on the center of buoyancy.
    pub fn hull_mesh(&self, angle_step_deg: f64) -> Result<HullMesh> {
        hull_mesh(&self.pattern_points, self.dimensions.xcb, angle_step_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_default_pipeline() {
        let state = compute(&Inputs::default()).unwrap();
        assert_eq!(state.pattern_points.len(), 51);
        assert_eq!(state.summary.gore_count, 4);
        assert_eq!(state.summary.cost, 440.0);
        assert_abs_diff_eq!(state.summary.surface_area, 10.667_539_767, epsilon = 1e-6);
        assert_abs_diff_eq!(state.summary.integrated_volume, 2.039_944_819, epsilon = 1e-6);
    }

    #[test]
    fn test_sample_ceiling() {
        let config = EngineConfig {
            max_samples: 40,
            ..EngineConfig::default()
        };
        let inputs = Inputs {
            n: 41,
            ..Inputs::default()
        };
        assert!(matches!(
            compute_with(&inputs, &config),
            Err(GertlerError::Domain(_))
        ));
        assert!(compute_with(&Inputs { n: 40, ..inputs }, &config).is_ok());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EngineConfig {
            gore_policy: crate::GorePolicy::Fixed { count: 0 },
            ..EngineConfig::default()
        };
        assert!(matches!(
            compute_with(&Inputs::default(), &config),
            Err(GertlerError::Config(_))
        ));
    }

    #[test]
    fn test_bounds_cover_profile_and_gore() {
        let state = compute(&Inputs::default()).unwrap();
        let profile = state.profile_bounds().unwrap();
        assert_eq!(profile.min.x, 0.0);
        assert_relative_eq!(profile.max.x, state.dimensions.length, epsilon = 1e-12);
        assert_abs_diff_eq!(profile.max.y, state.dimensions.diameter / 2.0, epsilon = 1e-3);
        assert_eq!(profile.min.y, -profile.max.y);

        let gore = state.gore_bounds().unwrap();
        let last = state.pattern_points.last().unwrap();
        assert_abs_diff_eq!(gore.max.x, last.cumulative_s, epsilon = 1e-9);
        assert_eq!(gore.min.y, -gore.max.y);
    }

    #[test]
    fn test_chart_domains_pad_both_views() {
        let state = compute(&Inputs::default()).unwrap();
        let (profile, gore) = state.chart_domains().unwrap();
        let length = state.dimensions.length;
        assert_relative_eq!(profile.min.x, -0.3 * length, epsilon = 1e-12);
        assert_relative_eq!(profile.max.x, 1.3 * length, epsilon = 1e-12);
        assert_eq!(profile.min.y, -profile.max.y);

        let tight = state.gore_bounds().unwrap();
        assert_relative_eq!(gore.extents().x, 1.6 * tight.extents().x, epsilon = 1e-12);
        assert!(gore.max.y > tight.max.y);
    }

    #[test]
    fn test_hull_mesh_is_centered_on_buoyancy() {
        let state = compute(&Inputs::default()).unwrap();
        let mesh = state.hull_mesh(5.0).unwrap();
        let min_x = mesh.positions.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        assert_abs_diff_eq!(min_x, -state.dimensions.xcb, epsilon = 1e-12);
    }
}
