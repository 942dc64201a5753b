//! Gertler envelope engine.
//!
//! [`compute`] turns one set of [`Inputs`] into a complete [`DerivedState`]:
//! profile coefficients, developed pattern points, principal dimensions and
//! the performance [`Summary`]. Every call rebuilds the whole chain.

pub mod aggregate;
pub mod config;
pub mod inputs;
pub mod pipeline;
pub mod report;
pub mod session;

pub use aggregate::Summary;
pub use config::{EngineConfig, GorePolicy};
pub use inputs::Inputs;
pub use pipeline::{compute, compute_with, DerivedState};
pub use report::{ContactInfo, Report};
pub use session::Session;
