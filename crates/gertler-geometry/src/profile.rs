//! Cosine-spaced sampling of the normalized radius profile.

use std::f64::consts::PI;

use gertler_core::{GertlerError, Result, Tolerance};
use serde::{Deserialize, Serialize};

use crate::coefficients::Coefficients;

/// One station of the normalized profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSample {
    /// Angular parameter in `[0, π]`.
    pub phi: f64,
    /// Axial position normalized by length, in `[0, 1]`.
    pub x2l: f64,
    /// Squared radius normalized by squared diameter, after snapping.
    pub r2d2: f64,
    /// Radius normalized by diameter.
    pub r2d: f64,
}

/// Sample the profile at `n + 1` stations.
///
/// `phi` is uniform in `[0, π]`, which clusters `x2l = (1 - cos phi)/2` near
/// the bow and stern. Each squared radius is snapped with `tolerance` before
/// the square root; a value still negative afterwards means the coefficients
/// describe an infeasible body and is returned as [`GertlerError::Degenerate`].
pub fn sample_profile(
    coefficients: &Coefficients,
    n: usize,
    tolerance: Tolerance,
) -> Result<Vec<ProfileSample>> {
    if n < 2 {
        return Err(GertlerError::domain("n", n, "must be at least 2"));
    }

    (0..=n)
        .map(|i| {
            // i/n first keeps the last station at exactly phi = π
            let phi = PI * (i as f64 / n as f64);
            let x2l = (1.0 - phi.cos()) / 2.0;
            let raw = coefficients.squared_radius(x2l);
            if !raw.is_finite() {
                return Err(GertlerError::Domain(format!(
                    "squared radius at station {} is not finite ({})",
                    i, raw
                )));
            }
            let r2d2 = tolerance.snap(raw);
            if r2d2 < 0.0 {
                return Err(GertlerError::Degenerate(format!(
                    "squared radius {:e} at station {} (x/L = {:.6}) is negative",
                    r2d2, i, x2l
                )));
            }
            Ok(ProfileSample {
                phi,
                x2l,
                r2d2,
                r2d: r2d2.max(0.0).sqrt(),
            })
        })
        .collect()
}
