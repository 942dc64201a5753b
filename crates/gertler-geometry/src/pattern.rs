//! Gore pattern development.
//!
//! Each profile station becomes a [`PatternPoint`] carrying its physical
//! coordinates on the body and the matching coordinates on a flattened gore.
//! The strip of surface around a station is treated as part of a cone whose
//! apex lies on the axis at distance `sPrime` along the generator; unrolling
//! that cone maps the half-gore width `U` onto an arc of angle `theta`.

use std::f64::consts::PI;

use gertler_core::{GertlerError, Result};
use gertler_math::Point2;
use serde::{Deserialize, Serialize};

use crate::profile::ProfileSample;

/// Point on the symmetry axis used as the successor of the stern tip, both
/// for the slope estimate and for the closing volume segment.
pub const AXIS_CLOSURE: Point2 = Point2::ZERO;

/// One station of the developed envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternPoint {
    pub index: usize,
    pub phi: f64,
    pub x2l: f64,
    pub r2d2: f64,
    pub r2d: f64,
    /// Axial position from the bow, m.
    pub x: f64,
    /// Radius, m.
    pub r: f64,
    /// Mirrored radius `-r`.
    pub nr: f64,
    pub dx: f64,
    pub dr: f64,
    pub ds: f64,
    /// Arc length along the profile from the bow.
    pub cumulative_s: f64,
    /// Half-width of one gore at this station.
    pub u: f64,
    pub nu: f64,
    /// Local slope of the profile.
    pub drdx: f64,
    /// Signed distance along the axis from the station to the cone apex.
    pub h: f64,
    /// Signed cone generator length.
    pub s_prime: f64,
    /// Unrolled half-angle.
    pub theta: f64,
    pub x_p: f64,
    pub y_p: f64,
    pub ny_p: f64,
    pub dx_p: f64,
    /// Flattened panel area between this station and the next, over all gores.
    pub ds_prime: f64,
    /// Truncated-cone volume term, before the `π/3` factor.
    pub sv: f64,
}

/// Develop `samples` into pattern points for a body of the given size.
///
/// `samples` must hold `n + 1 >= 3` stations ordered from bow to stern.
pub fn generate(
    samples: &[ProfileSample],
    length: f64,
    diameter: f64,
    gores: u32,
) -> Result<Vec<PatternPoint>> {
    if samples.len() < 3 {
        return Err(GertlerError::domain(
            "n",
            samples.len().saturating_sub(1),
            "must be at least 2",
        ));
    }
    if gores == 0 {
        return Err(GertlerError::domain("nG", gores, "must be at least 1"));
    }
    let last = samples.len() - 1;
    let gores_f = gores as f64;

    // Stations, step deltas and running arc length
    let mut points = Vec::with_capacity(samples.len());
    let mut cumulative_s = 0.0;
    let mut prev: Option<Point2> = None;
    for (index, sample) in samples.iter().enumerate() {
        let station = Point2::new(sample.x2l * length, sample.r2d * diameter);
        let (dx, dr) = match prev {
            Some(p) => (station.x - p.x, station.y - p.y),
            None => (0.0, 0.0),
        };
        let ds = dx.hypot(dr);
        cumulative_s += ds;
        let u = PI * station.y / gores_f;
        points.push(PatternPoint {
            index,
            phi: sample.phi,
            x2l: sample.x2l,
            r2d2: sample.r2d2,
            r2d: sample.r2d,
            x: station.x,
            r: station.y,
            nr: -station.y,
            dx,
            dr,
            ds,
            cumulative_s,
            u,
            nu: -u,
            drdx: 0.0,
            h: 0.0,
            s_prime: 0.0,
            theta: 0.0,
            x_p: 0.0,
            y_p: 0.0,
            ny_p: 0.0,
            dx_p: 0.0,
            ds_prime: 0.0,
            sv: 0.0,
        });
        prev = Some(station);
    }

    // Slopes and unrolled coordinates
    let stations: Vec<Point2> = points.iter().map(|p| Point2::new(p.x, p.r)).collect();
    for i in 0..=last {
        let drdx = if i == 0 {
            slope(stations[0], stations[1])
        } else {
            let next = if i < last { stations[i + 1] } else { AXIS_CLOSURE };
            three_point_slope(stations[i - 1], stations[i], next)
        };
        if !drdx.is_finite() {
            return Err(GertlerError::Domain(format!(
                "profile slope at station {} is not finite",
                i
            )));
        }

        let p = &mut points[i];
        let h = if i == 0 { 0.0 } else { p.r / drdx };
        let unrolled = unroll(p.r, h, p.u, p.cumulative_s, i == last);
        p.drdx = drdx;
        p.h = unrolled.h;
        p.s_prime = unrolled.s_prime;
        p.theta = unrolled.theta;
        p.x_p = unrolled.x_p;
        p.y_p = unrolled.y_p;
        p.ny_p = -unrolled.y_p;
    }

    // Panel increments and volume terms
    for i in 0..last {
        let (here, next) = (points[i], points[i + 1]);
        let dx_p = next.x_p - here.x_p;
        points[i].dx_p = dx_p;
        points[i].ds_prime = gores_f * dx_p * (next.y_p + here.y_p);
        points[i].sv = frustum_term(stations[i], stations[i + 1]);
    }
    points[last].dx_p = 0.0;
    points[last].ds_prime = 0.0;
    points[last].sv = frustum_term(stations[last], AXIS_CLOSURE);

    Ok(points)
}

/// Total flattened panel area over all gores.
pub fn surface_area(points: &[PatternPoint]) -> f64 {
    points.iter().map(|p| p.ds_prime).sum()
}

/// Volume of the stacked truncated cones.
pub fn integrated_volume(points: &[PatternPoint]) -> f64 {
    PI / 3.0 * points.iter().map(|p| p.sv).sum::<f64>()
}

fn slope(a: Point2, b: Point2) -> f64 {
    (a.y - b.y) / (a.x - b.x)
}

/// Derivative at `curr` of the parabola through three stations.
fn three_point_slope(prev: Point2, curr: Point2, next: Point2) -> f64 {
    slope(prev, curr) - slope(prev, next) + slope(curr, next)
}

/// `Δx·(r₁² + r₁r₀ + r₀²)`; times `π/3` this is the frustum volume.
fn frustum_term(from: Point2, to: Point2) -> f64 {
    (to.x - from.x) * (to.y * to.y + to.y * from.y + from.y * from.y)
}

struct Unrolled {
    h: f64,
    s_prime: f64,
    theta: f64,
    x_p: f64,
    y_p: f64,
}

/// Unroll the cone strip at one station.
///
/// A zero-length generator (a tip) or an infinite one (zero slope, the strip
/// is cylindrical) has no arc: the gore edge sits at `(cumulative_s, u)`.
/// `closes_tip` forces `theta = 0` at the stern.
fn unroll(r: f64, h: f64, u: f64, cumulative_s: f64, closes_tip: bool) -> Unrolled {
    if !h.is_finite() {
        return Unrolled {
            h: 0.0,
            s_prime: 0.0,
            theta: 0.0,
            x_p: cumulative_s,
            y_p: u,
        };
    }

    let s_prime = r.hypot(h).copysign(h);
    if s_prime == 0.0 {
        return Unrolled {
            h,
            s_prime,
            theta: 0.0,
            x_p: cumulative_s,
            y_p: if closes_tip { 0.0 } else { u },
        };
    }

    let theta = if closes_tip { 0.0 } else { u / s_prime };
    let half = (theta / 2.0).sin();
    Unrolled {
        h,
        s_prime,
        theta,
        // cumulative_s - s' + s'·cos(theta), without the cancellation
        x_p: cumulative_s - 2.0 * s_prime * half * half,
        y_p: s_prime * theta.sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficients::{Coefficients, ShapeParameters};
    use crate::profile::sample_profile;
    use gertler_core::Tolerance;

    fn default_points(n: usize, gores: u32) -> Vec<PatternPoint> {
        let a = Coefficients::solve(&ShapeParameters {
            m: 0.4,
            ro: 0.6,
            rl: 0.2,
            cp: 0.65,
        })
        .unwrap();
        let samples = sample_profile(&a, n, Tolerance::default()).unwrap();
        generate(&samples, 100f64.cbrt(), 100f64.cbrt() / 5.0, gores).unwrap()
    }

    /// r2D2 = x - x²: with L = D = 1 this is a sphere of radius 1/2.
    fn sphere_points(n: usize, gores: u32) -> Vec<PatternPoint> {
        let a = Coefficients([1.0, -1.0, 0.0, 0.0, 0.0, 0.0]);
        let samples = sample_profile(&a, n, Tolerance::default()).unwrap();
        generate(&samples, 1.0, 1.0, gores).unwrap()
    }

    #[test]
    fn test_point_count_and_ordering() {
        for n in [2, 3, 10, 64] {
            let points = default_points(n, 4);
            assert_eq!(points.len(), n + 1);
            for w in points.windows(2) {
                assert!(w[1].x >= w[0].x, "x must not decrease");
                assert!(w[1].cumulative_s >= w[0].cumulative_s, "arc length must not decrease");
                assert_eq!(w[1].index, w[0].index + 1);
            }
        }
    }

    #[test]
    fn test_tips_are_closed() {
        let points = default_points(40, 4);
        let first = points[0];
        let last = points[points.len() - 1];
        assert_eq!(first.r, 0.0);
        assert_eq!(first.x_p, 0.0);
        assert_eq!(first.y_p, 0.0);
        assert_eq!(last.r, 0.0);
        assert!((last.x - 100f64.cbrt()).abs() < 1e-12);
    }

    #[test]
    fn test_stern_closure_is_exact() {
        for n in [2, 5, 50] {
            let points = default_points(n, 7);
            let last = points[n];
            assert_eq!(last.theta, 0.0);
            assert_eq!(last.dx_p, 0.0);
            assert_eq!(last.ds_prime, 0.0);
            assert_eq!(last.x_p, last.cumulative_s);
        }
    }

    #[test]
    fn test_stern_slope_uses_axis_closure() {
        let points = default_points(10, 4);
        let n = points.len() - 1;
        let prev = Point2::new(points[n - 1].x, points[n - 1].r);
        let curr = Point2::new(points[n].x, points[n].r);
        let expected = slope(prev, curr) - prev.y / prev.x;
        assert!((points[n].drdx - expected).abs() < 1e-12);
    }

    #[test]
    fn test_three_point_slope_exact_for_parabola() {
        let f = |x: f64| 3.0 * x * x - 2.0 * x + 1.0;
        let (a, b, c) = (0.1, 0.35, 0.9);
        let got = three_point_slope(
            Point2::new(a, f(a)),
            Point2::new(b, f(b)),
            Point2::new(c, f(c)),
        );
        assert!((got - (6.0 * b - 2.0)).abs() < 1e-12, "got {}", got);
    }

    #[test]
    fn test_bow_slope_is_forward_difference() {
        let points = default_points(10, 4);
        let expected = (points[1].r - points[0].r) / (points[1].x - points[0].x);
        assert_eq!(points[0].drdx, expected);
        assert_eq!(points[0].h, 0.0);
    }

    #[test]
    fn test_gore_half_width() {
        let points = default_points(12, 6);
        for p in &points {
            assert!((p.u - PI * p.r / 6.0).abs() < 1e-15);
            assert_eq!(p.nu, -p.u);
            assert_eq!(p.nr, -p.r);
            assert_eq!(p.ny_p, -p.y_p);
        }
    }

    #[test]
    fn test_signed_chord_follows_curvature_radius() {
        let points = default_points(30, 4);
        for p in points[1..points.len() - 1].iter().filter(|p| p.s_prime != 0.0) {
            assert!((p.s_prime.abs() - p.r.hypot(p.h)).abs() < 1e-9 * p.s_prime.abs().max(1.0));
            assert_eq!(p.s_prime.is_sign_negative(), p.h.is_sign_negative());
        }
    }

    #[test]
    fn test_flat_strip_has_no_cancellation() {
        // Three stations: the middle one sits at the exact maximum of the
        // sphere, so its slope is numerically zero.
        let points = sphere_points(2, 4);
        let mid = points[1];
        assert!((mid.x_p - mid.cumulative_s).abs() < 1e-9);
        assert!((mid.y_p - mid.u).abs() < 1e-9);
    }

    #[test]
    fn test_all_values_finite() {
        for p in default_points(80, 5) {
            for v in [p.drdx, p.h, p.s_prime, p.theta, p.x_p, p.y_p, p.dx_p, p.ds_prime, p.sv] {
                assert!(v.is_finite(), "non-finite value at station {}", p.index);
            }
        }
    }

    #[test]
    fn test_sphere_volume_converges() {
        let exact = PI / 6.0;
        let coarse = (integrated_volume(&sphere_points(20, 8)) - exact).abs();
        let fine = (integrated_volume(&sphere_points(200, 8)) - exact).abs();
        assert!(fine < coarse);
        assert!(fine / exact < 1e-3, "relative error {}", fine / exact);
    }

    #[test]
    fn test_sphere_surface_area() {
        let area = surface_area(&sphere_points(200, 24));
        assert!((area - PI).abs() / PI < 0.01, "area {}", area);
    }

    #[test]
    fn test_closing_volume_term_uses_axis() {
        let points = default_points(8, 4);
        let last = points[8];
        assert_eq!(last.sv, -last.x * last.r * last.r);
    }

    #[test]
    fn test_rejects_zero_gores() {
        let a = Coefficients([1.0, -1.0, 0.0, 0.0, 0.0, 0.0]);
        let samples = sample_profile(&a, 4, Tolerance::default()).unwrap();
        assert!(generate(&samples, 1.0, 1.0, 0).is_err());
        assert!(generate(&samples[..2], 1.0, 1.0, 4).is_err());
    }
}
