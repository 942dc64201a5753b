use thiserror::Error;

#[derive(Debug, Error)]
pub enum GertlerError {
    /// An input outside its valid range, or a solve that left the finite domain.
    #[error("Domain error: {0}")]
    Domain(String),

    /// Squared radius negative beyond the snap tolerance.
    #[error("Numeric degeneracy: {0}")]
    Degenerate(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GertlerError {
    /// Shorthand for a domain error naming the offending field.
    pub fn domain(field: &str, value: impl std::fmt::Display, reason: &str) -> Self {
        Self::Domain(format!("{} = {} {}", field, value, reason))
    }
}

pub type Result<T> = std::result::Result<T, GertlerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_message_names_field() {
        let err = GertlerError::domain("m", 1.2, "must lie strictly between 0 and 1");
        assert_eq!(
            err.to_string(),
            "Domain error: m = 1.2 must lie strictly between 0 and 1"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            let read: std::io::Result<()> =
                Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
            read?;
            Ok(())
        }
        assert!(matches!(fails(), Err(GertlerError::Io(_))));
    }
}
