//! Error types for variate sampling.
//!
//! This module provides:
//! - `SamplerError`: Errors from sampling calls with out-of-domain parameters
//! - `ConfigError`: Errors from the validating Dirichlet configuration builder

use thiserror::Error;

/// Sampling errors.
///
/// Returned synchronously, before any uniform deviate is drawn for the
/// offending call, so a failed call leaves the generator stream untouched.
///
/// # Examples
/// ```
/// use sampler_kernel::SamplerError;
///
/// let err = SamplerError::InvalidParameter { name: "alpha", value: -1.0 };
/// assert_eq!(format!("{}", err), "Invalid parameter 'alpha' = -1: must be strictly positive and in range");
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum SamplerError {
    /// Gamma shape or scale is not strictly positive (or is NaN), or the shape
    /// exceeds [`MAX_SHAPE`](crate::gamma::MAX_SHAPE).
    #[error("Invalid parameter '{name}' = {value}: must be strictly positive and in range")]
    InvalidParameter {
        /// Parameter name (`alpha` or `beta`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Configuration error for [`DirichletConfig`](crate::dirichlet::DirichletConfig).
///
/// These errors occur at build time when the builder is given parameters that
/// violate the partition invariants.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Dimension count of zero.
    #[error("Invalid size {0}: must be at least 1")]
    InvalidSize(usize),

    /// Concentration not strictly positive and finite.
    #[error("Invalid concentration {0}: must be strictly positive and finite")]
    InvalidConcentration(f64),

    /// Magnitude not strictly positive and finite.
    #[error("Invalid magnitude {0}: must be strictly positive and finite")]
    InvalidMagnitude(f64),

    /// Partition entries or length inconsistent with the configuration.
    #[error("Invalid partition: {0}")]
    InvalidPartition(String),
}
