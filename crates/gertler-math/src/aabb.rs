use crate::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in the plane.
///
/// Used for the side-view profile `(x, ±r)` and the flattened gore `(xP, ±yP)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb2 {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb2 {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    pub fn extents(&self) -> Vector2 {
        self.max - self.min
    }

    /// Grow each side by `fraction` of the extent along that axis.
    pub fn padded(&self, fraction: f64) -> Self {
        let offset = self.extents() * fraction;
        Self {
            min: self.min - offset,
            max: self.max + offset,
        }
    }
}
