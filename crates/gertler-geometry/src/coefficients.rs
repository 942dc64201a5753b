//! Series-58 profile coefficients.
//!
//! The squared radius profile is `r2D2(x2L) = Σ a[j] * x2L^(j+1)` for `j = 0..6`,
//! with `x2L` the axial position normalized by length and `r2D2` the squared
//! radius normalized by the squared diameter. The six coefficients come from a
//! 6×6 linear system of boundary and shape constraints.

use gertler_core::traits::Validate;
use gertler_core::{GertlerError, Result};
use gertler_math::polynomial;
use nalgebra::{Matrix6, Vector6};
use serde::{Deserialize, Serialize};

/// Number of terms in the profile polynomial.
pub const TERMS: usize = 6;

/// Shape parameters that fix the profile polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeParameters {
    /// Position of maximum thickness as a fraction of length.
    pub m: f64,
    /// Nondimensional bow radius of curvature.
    pub ro: f64,
    /// Nondimensional stern radius of curvature.
    pub rl: f64,
    /// Prismatic coefficient.
    pub cp: f64,
}

impl Validate for ShapeParameters {
    fn validate(&self) -> Result<()> {
        if !(self.m.is_finite() && self.m > 0.0 && self.m < 1.0) {
            return Err(GertlerError::domain("m", self.m, "must lie strictly between 0 and 1"));
        }
        if !(self.ro.is_finite() && self.ro >= 0.0) {
            return Err(GertlerError::domain("ro", self.ro, "must be a non-negative number"));
        }
        if !(self.rl.is_finite() && self.rl >= 0.0) {
            return Err(GertlerError::domain("rl", self.rl, "must be a non-negative number"));
        }
        if !(self.cp.is_finite() && self.cp > 0.0) {
            return Err(GertlerError::domain("Cp", self.cp, "must be positive"));
        }
        Ok(())
    }
}

/// Solved profile coefficients `a[0..6]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients(pub [f64; TERMS]);

impl Coefficients {
    /// Solve the boundary-condition system for the given shape.
    ///
    /// Rows, in order:
    /// 1. bow radius of curvature: `a[0] = 2·ro`
    /// 2. closed stern: `r2D2(1) = 0`
    /// 3. stern radius of curvature: `r2D2'(1) = -2·rl`
    /// 4. maximum half-diameter at `m`: `r2D2(m) = 1/4`
    /// 5. zero slope at `m`: `r2D2'(m) = 0`
    /// 6. prismatic coefficient: `∫₀¹ r2D2 = Cp/4`
    pub fn solve(shape: &ShapeParameters) -> Result<Self> {
        shape.validate()?;
        let (lhs, rhs) = build_system(shape);

        let solution = lhs.lu().solve(&rhs).ok_or_else(|| {
            GertlerError::Domain(format!(
                "coefficient system is singular for m = {}",
                shape.m
            ))
        })?;

        let mut a = [0.0; TERMS];
        a.copy_from_slice(solution.as_slice());
        if let Some(j) = a.iter().position(|c| !c.is_finite()) {
            return Err(GertlerError::Domain(format!(
                "coefficient a[{}] = {} is not finite for m = {}",
                j, a[j], shape.m
            )));
        }
        Ok(Self(a))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Normalized squared radius at normalized position `x2l`.
    pub fn squared_radius(&self, x2l: f64) -> f64 {
        polynomial::eval(&self.0, x2l)
    }

    /// Slope of the normalized squared radius at `x2l`.
    pub fn squared_radius_slope(&self, x2l: f64) -> f64 {
        polynomial::derivative(&self.0, x2l)
    }
}

fn build_system(shape: &ShapeParameters) -> (Matrix6<f64>, Vector6<f64>) {
    let bow = {
        let mut row = vec![0.0; TERMS];
        row[0] = 1.0;
        row
    };
    let stern_closed = polynomial::power_row(1.0, TERMS);
    let stern_slope = polynomial::derivative_row(1.0, TERMS);
    let max_thickness = polynomial::power_row(shape.m, TERMS);
    let max_thickness_slope = polynomial::derivative_row(shape.m, TERMS);
    let prismatic: Vec<f64> = (0..TERMS).map(|j| 1.0 / (j + 2) as f64).collect();

    let rows = [
        bow,
        stern_closed,
        stern_slope,
        max_thickness,
        max_thickness_slope,
        prismatic,
    ];
    let lhs = Matrix6::from_fn(|i, j| rows[i][j]);
    let rhs = Vector6::new(
        2.0 * shape.ro,
        0.0,
        -2.0 * shape.rl,
        0.25,
        0.0,
        shape.cp / 4.0,
    );
    (lhs, rhs)
}
