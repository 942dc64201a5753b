/// Floating-point noise policy for the profile computation.
///
/// Polynomial evaluation near the bow and stern tips leaves residues of a few
/// ULPs around zero. `snap` is the single place where such residues are
/// normalized before a square root is taken.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Magnitudes strictly below this are treated as exact zero.
    pub snap: f64,
}

impl Tolerance {
    pub const DEFAULT_SNAP: f64 = 1e-12;

    pub fn new(snap: f64) -> Self {
        Self { snap }
    }

    /// Check if a value is zero within the snap tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.snap
    }

    /// Replace sub-epsilon noise (including `-0.0`) with `+0.0`.
    ///
    /// Values at or above the tolerance pass through untouched, so a negative
    /// result still reaches the caller and can be reported.
    pub fn snap(self, v: f64) -> f64 {
        if self.is_zero(v) {
            0.0
        } else {
            v
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SNAP)
    }
}
