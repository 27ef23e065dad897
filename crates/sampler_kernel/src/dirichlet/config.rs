//! Dirichlet sampler configuration.
//!
//! This module provides the immutable [`DirichletConfig`] and its validating
//! builder.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gamma::{is_valid_shape, MAX_SHAPE};

/// Tolerance on the partition sum.
pub const PARTITION_SUM_TOLERANCE: f64 = 1e-9;

/// Dirichlet configuration: magnitude and partition.
///
/// The concentration of dimension `i` is `partition[i] * magnitude`. The
/// partition has one strictly positive entry per dimension and sums to 1.
/// With the `serde` feature, deserialisation runs
/// [`DirichletConfig::validate`] and fails on the same inputs.
///
/// # Examples
///
/// ```rust
/// use sampler_kernel::DirichletConfig;
///
/// let config = DirichletConfig::builder()
///     .size(4)
///     .alpha(0.5)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.size(), 4);
/// assert_eq!(config.magnitude(), 2.0);
/// assert_eq!(config.partition(), &[0.25; 4]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDirichletConfig"))]
pub struct DirichletConfig {
    /// Total concentration, `size * alpha` in the symmetric case.
    magnitude: f64,
    /// Per-dimension share of the magnitude.
    partition: Vec<f64>,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

/// Unchecked wire form of [`DirichletConfig`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawDirichletConfig {
    magnitude: f64,
    partition: Vec<f64>,
    #[serde(default)]
    seed: Option<u64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDirichletConfig> for DirichletConfig {
    type Error = ConfigError;

    fn try_from(raw: RawDirichletConfig) -> Result<Self, Self::Error> {
        let config = Self {
            magnitude: raw.magnitude,
            partition: raw.partition,
            seed: raw.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

impl DirichletConfig {
    /// Symmetric configuration: `size` dimensions of concentration `alpha`.
    ///
    /// The precondition `size > 0 && alpha > 0` is the caller's and is not
    /// checked. A non-positive `alpha` surfaces as
    /// [`SamplerError::InvalidParameter`](crate::SamplerError) on the first
    /// draw; `size == 0` yields empty distributions. Use
    /// [`DirichletConfig::builder`] for up-front validation.
    pub fn symmetric(size: usize, alpha: f64) -> Self {
        Self {
            magnitude: size as f64 * alpha,
            partition: vec![1.0 / size as f64; size],
            seed: None,
        }
    }

    /// Asymmetric configuration from per-dimension concentrations.
    ///
    /// The magnitude is the sum of `alphas` and the partition is `alphas`
    /// normalised by it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `alphas` is empty or holds a non-positive or
    /// non-finite entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_kernel::DirichletConfig;
    ///
    /// let config = DirichletConfig::from_alphas(&[1.0, 2.0, 1.0]).unwrap();
    /// assert_eq!(config.magnitude(), 4.0);
    /// assert_eq!(config.partition(), &[0.25, 0.5, 0.25]);
    /// ```
    pub fn from_alphas(alphas: &[f64]) -> Result<Self, ConfigError> {
        if alphas.is_empty() {
            return Err(ConfigError::InvalidSize(0));
        }
        if let Some(&bad) = alphas.iter().find(|a| !is_positive_finite(**a)) {
            return Err(ConfigError::InvalidConcentration(bad));
        }
        let magnitude: f64 = alphas.iter().sum();
        Ok(Self {
            magnitude,
            partition: alphas.iter().map(|a| a / magnitude).collect(),
            seed: None,
        })
    }

    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> DirichletConfigBuilder {
        DirichletConfigBuilder::default()
    }

    /// Returns the number of dimensions.
    #[inline]
    pub fn size(&self) -> usize {
        self.partition.len()
    }

    /// Returns the magnitude (total concentration).
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Returns the partition.
    #[inline]
    pub fn partition(&self) -> &[f64] {
        &self.partition
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Per-dimension concentrations, `partition[i] * magnitude`.
    pub fn concentrations(&self) -> impl Iterator<Item = f64> + '_ {
        self.partition.iter().map(move |p| p * self.magnitude)
    }

    /// Returns a copy of the configuration with `seed` attached.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks every invariant of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - the partition is empty
    /// - the magnitude is not strictly positive and finite
    /// - a partition entry is not strictly positive and finite
    /// - the partition does not sum to 1 within [`PARTITION_SUM_TOLERANCE`]
    /// - a concentration exceeds [`MAX_SHAPE`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.partition.is_empty() {
            return Err(ConfigError::InvalidSize(0));
        }
        if !is_positive_finite(self.magnitude) {
            return Err(ConfigError::InvalidMagnitude(self.magnitude));
        }
        if let Some((i, p)) = self
            .partition
            .iter()
            .enumerate()
            .find(|(_, p)| !is_positive_finite(**p))
        {
            return Err(ConfigError::InvalidPartition(format!(
                "entry {} is {}, must be strictly positive",
                i, p
            )));
        }
        let sum: f64 = self.partition.iter().sum();
        if (sum - 1.0).abs() > PARTITION_SUM_TOLERANCE {
            return Err(ConfigError::InvalidPartition(format!(
                "entries sum to {}, expected 1",
                sum
            )));
        }
        if let Some(bad) = self.concentrations().find(|a| !is_valid_shape(*a)) {
            return Err(ConfigError::InvalidConcentration(bad));
        }
        Ok(())
    }
}

fn is_positive_finite(x: f64) -> bool {
    x > 0.0 && x.is_finite()
}

/// Builder for [`DirichletConfig`].
///
/// Either describe a symmetric configuration with `size` and `alpha`, or give
/// an explicit `partition` (with `magnitude`, or `alpha` per dimension).
/// Everything is validated in [`DirichletConfigBuilder::build`].
///
/// # Examples
///
/// ```rust
/// use sampler_kernel::DirichletConfig;
///
/// let config = DirichletConfig::builder()
///     .partition(vec![0.2, 0.3, 0.5])
///     .magnitude(10.0)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.size(), 3);
///
/// assert!(DirichletConfig::builder().size(0).build().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct DirichletConfigBuilder {
    size: Option<usize>,
    alpha: Option<f64>,
    partition: Option<Vec<f64>>,
    magnitude: Option<f64>,
    seed: Option<u64>,
}

impl DirichletConfigBuilder {
    /// Sets the number of dimensions.
    #[inline]
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the per-dimension concentration (default 1.0).
    #[inline]
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Sets an explicit partition.
    #[inline]
    pub fn partition(mut self, partition: Vec<f64>) -> Self {
        self.partition = Some(partition);
        self
    }

    /// Sets the magnitude, overriding `size * alpha`.
    #[inline]
    pub fn magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the size is missing or zero, if `size` and the
    /// partition length disagree, or if [`DirichletConfig::validate`] fails.
    pub fn build(self) -> Result<DirichletConfig, ConfigError> {
        let alpha = self.alpha.unwrap_or(1.0);
        if !is_positive_finite(alpha) {
            return Err(ConfigError::InvalidConcentration(alpha));
        }

        let partition = match (self.partition, self.size) {
            (Some(partition), Some(size)) if partition.len() != size => {
                return Err(ConfigError::InvalidPartition(format!(
                    "length {} does not match size {}",
                    partition.len(),
                    size
                )));
            }
            (Some(partition), _) => partition,
            (None, Some(size)) if size > 0 => vec![1.0 / size as f64; size],
            (None, size) => return Err(ConfigError::InvalidSize(size.unwrap_or(0))),
        };

        let magnitude = self
            .magnitude
            .unwrap_or(partition.len() as f64 * alpha);

        let config = DirichletConfig {
            magnitude,
            partition,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
