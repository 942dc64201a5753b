//! Closed-form body sizing and center of buoyancy.

use std::f64::consts::PI;

use gertler_math::polynomial;
use serde::{Deserialize, Serialize};

use crate::coefficients::Coefficients;

/// Principal dimensions of the envelope sized from a block volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyDimensions {
    /// `Cb = Cp·π/4`
    pub block_coefficient: f64,
    /// Enclosed volume `V = Vb·Cb`, in m³.
    pub volume: f64,
    /// Overall length `L`, in m.
    pub length: f64,
    /// Maximum diameter `D = L / L2D`, in m.
    pub diameter: f64,
    /// Center of buoyancy measured from the bow, in m.
    pub xcb: f64,
}

impl BodyDimensions {
    /// Size the body from block volume `vb`, slenderness `l2d` and prismatic
    /// coefficient `cp`, and locate its center of buoyancy.
    ///
    /// The length follows from `V = Cp·(π/4)·D²·L` with `D = L/L2D`.
    pub fn new(vb: f64, l2d: f64, cp: f64, coefficients: &Coefficients) -> Self {
        let block_coefficient = cp * PI / 4.0;
        let volume = vb * block_coefficient;
        let length = ((volume * l2d * l2d * 4.0) / (cp * PI)).cbrt();
        let diameter = length / l2d;
        let xcb = center_of_buoyancy(coefficients, length);
        Self {
            block_coefficient,
            volume,
            length,
            diameter,
            xcb,
        }
    }

    pub fn is_finite(&self) -> bool {
        [
            self.block_coefficient,
            self.volume,
            self.length,
            self.diameter,
            self.xcb,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Axial centroid of the displaced volume.
///
/// Ratio of the first moment to the area of `r2D2` over `[0, 1]`:
/// `xCB = L · Σ a[j]/(j+3) / Σ a[j]/(j+2)`.
pub fn center_of_buoyancy(coefficients: &Coefficients, length: f64) -> f64 {
    let a = coefficients.as_slice();
    polynomial::moment(a, 1) / polynomial::moment(a, 0) * length
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficients::ShapeParameters;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_of_buoyancy_fixed_coefficients() {
        // r2D2 = x² - x³: moment 1/20, area 1/12, centroid at 0.6·L
        let a = Coefficients([0.0, 1.0, -1.0, 0.0, 0.0, 0.0]);
        assert_relative_eq!(center_of_buoyancy(&a, 10.0), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_center_of_buoyancy_symmetric_profile() {
        let a = Coefficients([1.0, -1.0, 0.0, 0.0, 0.0, 0.0]);
        assert_relative_eq!(center_of_buoyancy(&a, 4.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_default_dimensions() {
        let shape = ShapeParameters {
            m: 0.4,
            ro: 0.6,
            rl: 0.2,
            cp: 0.65,
        };
        let a = Coefficients::solve(&shape).unwrap();
        let dims = BodyDimensions::new(4.0, 5.0, 0.65, &a);

        assert_relative_eq!(dims.block_coefficient, 0.65 * PI / 4.0);
        assert_relative_eq!(dims.volume, 2.042_035_224_833_365_5, epsilon = 1e-12);
        // L³ = Vb·L2D² once Cp cancels
        assert_relative_eq!(dims.length, 100f64.cbrt(), epsilon = 1e-12);
        assert_relative_eq!(dims.diameter, dims.length / 5.0, epsilon = 1e-12);
        assert_relative_eq!(dims.xcb, 2.144_169_753_194_181_5, epsilon = 1e-9);
        assert!(dims.is_finite());
    }

    #[test]
    fn test_closed_form_volume_matches_profile_integral() {
        let shape = ShapeParameters {
            m: 0.5,
            ro: 0.4,
            rl: 0.3,
            cp: 0.7,
        };
        let a = Coefficients::solve(&shape).unwrap();
        let dims = BodyDimensions::new(6.0, 4.0, shape.cp, &a);
        let integral =
            PI * dims.diameter * dims.diameter * dims.length * polynomial::moment(a.as_slice(), 0);
        assert_relative_eq!(integral, dims.volume, epsilon = 1e-9);
    }
}
