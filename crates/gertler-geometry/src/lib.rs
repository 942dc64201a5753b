//! Gertler envelope geometry: Series-58 profile, gore pattern development, hull mesh.

pub mod body;
pub mod coefficients;
pub mod pattern;
pub mod profile;
pub mod revolve;

pub use body::BodyDimensions;
pub use coefficients::{Coefficients, ShapeParameters};
pub use pattern::PatternPoint;
pub use profile::ProfileSample;
pub use revolve::HullMesh;
