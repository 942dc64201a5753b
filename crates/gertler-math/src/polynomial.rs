//! Power-basis polynomials without a constant term.
//!
//! The body profile is written as `p(x) = Σ a[j] * x^(j+1)`, so `p(0) = 0`
//! for any coefficients. These helpers work on that shifted basis.

/// Evaluate `Σ a[j] * x^(j+1)` using Horner's scheme.
pub fn eval(a: &[f64], x: f64) -> f64 {
    x * a.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Evaluate the first derivative `Σ (j+1) * a[j] * x^j`.
pub fn derivative(a: &[f64], x: f64) -> f64 {
    a.iter()
        .enumerate()
        .rev()
        .fold(0.0, |acc, (j, &c)| acc * x + (j + 1) as f64 * c)
}

/// Weighted integral `∫₀¹ x^k · p(x) dx = Σ a[j] / (j + 2 + k)`.
///
/// `k = 0` gives the area under the profile, `k = 1` its first moment.
pub fn moment(a: &[f64], k: usize) -> f64 {
    a.iter()
        .enumerate()
        .map(|(j, &c)| c / (j + 2 + k) as f64)
        .sum()
}

/// Row of powers `[x, x², ..., x^len]` matching the shifted basis.
pub fn power_row(x: f64, len: usize) -> Vec<f64> {
    (1..=len as i32).map(|p| x.powi(p)).collect()
}

/// Row of derivative weights `[1, 2x, 3x², ...]` matching the shifted basis.
pub fn derivative_row(x: f64, len: usize) -> Vec<f64> {
    (0..len as i32).map(|p| (p + 1) as f64 * x.powi(p)).collect()
}
