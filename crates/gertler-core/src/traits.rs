use crate::error::Result;

/// Check that a value lies inside the domain the engine accepts.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
