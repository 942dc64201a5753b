//! Design inputs for one computation.

use std::ops::RangeInclusive;

use gertler_core::traits::Validate;
use gertler_core::{GertlerError, Result};
use gertler_geometry::ShapeParameters;
use serde::{Deserialize, Serialize};

/// Envelope fabric areal density range accepted by the engine, g/m².
pub const RHO_S_RANGE: RangeInclusive<f64> = 10.0..=100.0;

/// Shape and sizing parameters of one envelope.
///
/// Field names serialize as the design sheet labels them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// Number of profile segments; `n + 1` stations are produced.
    pub n: usize,
    /// Length-to-diameter ratio.
    #[serde(rename = "L2D")]
    pub l2d: f64,
    /// Block volume, m³.
    #[serde(rename = "Vb")]
    pub vb: f64,
    /// Position of maximum thickness as a fraction of length.
    pub m: f64,
    /// Bow radius parameter.
    pub ro: f64,
    /// Stern radius parameter.
    pub rl: f64,
    /// Prismatic coefficient.
    #[serde(rename = "Cp")]
    pub cp: f64,
    /// Envelope fabric areal density, g/m².
    #[serde(rename = "rhoS")]
    pub rho_s: f64,
}

impl Inputs {
    pub fn shape(&self) -> ShapeParameters {
        ShapeParameters {
            m: self.m,
            ro: self.ro,
            rl: self.rl,
            cp: self.cp,
        }
    }
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            n: 50,
            l2d: 5.0,
            vb: 4.0,
            m: 0.4,
            ro: 0.6,
            rl: 0.2,
            cp: 0.65,
            rho_s: 30.0,
        }
    }
}

impl Validate for Inputs {
    fn validate(&self) -> Result<()> {
        if self.n < 2 {
            return Err(GertlerError::domain("n", self.n, "must be at least 2"));
        }
        if !(self.l2d.is_finite() && self.l2d > 0.0) {
            return Err(GertlerError::domain("L2D", self.l2d, "must be positive"));
        }
        if !(self.vb.is_finite() && self.vb > 0.0) {
            return Err(GertlerError::domain("Vb", self.vb, "must be positive"));
        }
        if !(self.rho_s.is_finite() && RHO_S_RANGE.contains(&self.rho_s)) {
            return Err(GertlerError::domain(
                "rhoS",
                self.rho_s,
                &format!(
                    "must lie in {}..={} g/m²",
                    RHO_S_RANGE.start(),
                    RHO_S_RANGE.end()
                ),
            ));
        }
        self.shape().validate()
    }
}
