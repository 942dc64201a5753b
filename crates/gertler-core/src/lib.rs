pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{GertlerError, Result};
pub use tolerance::Tolerance;
