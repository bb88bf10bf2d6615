//! Error types and result alias for the crate.
//!
//! The sampling and generation paths are total and never return an error.
//! [`enum@crate::error::Error`] is only produced when validating configuration
//! for the scanner and the particle generators.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

/// Returns an [`Error::InvalidConfig`] unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "{name} must be finite and > 0 (got {value})"
        )));
    }
    Ok(())
}

/// Returns an [`Error::InvalidConfig`] unless `min..=max` is a finite, non-empty range.
pub(crate) fn ensure_range(name: &str, min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(Error::InvalidConfig(format!(
            "{name} range must be finite with min <= max (got {min}..={max})"
        )));
    }
    Ok(())
}
