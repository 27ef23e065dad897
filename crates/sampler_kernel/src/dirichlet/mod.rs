//! # Dirichlet Probability Vectors
//!
//! Dirichlet draws via the Gamma normalisation construction: one
//! Gamma(`partition[i] * magnitude`, 1) deviate per dimension, divided by
//! their sum.
//!
//! ## Degenerate Components
//!
//! For small concentrations a Gamma draw can underflow to exactly zero (for
//! shape 0.01 the GS lower branch raises a uniform to the 100th power). Such
//! components are replaced by [`COMPONENT_FLOOR`] before normalisation. This
//! is an approximation, not an exact correction: it slightly inflates tiny
//! components, but it guarantees every entry of the result is strictly
//! positive and that the sum is never zero.

mod config;

pub use config::{DirichletConfig, DirichletConfigBuilder, PARTITION_SUM_TOLERANCE};

use rand::rngs::StdRng;

use crate::bits::BitSource;
use crate::error::SamplerError;
use crate::gamma::{is_valid_shape, GammaParams};
use crate::sampler::Sampler;

/// Value substituted for a non-positive Gamma component.
pub const COMPONENT_FLOOR: f64 = 0.0001;

/// Sampler of Dirichlet-distributed probability vectors.
///
/// Owns a [`Sampler`] and a fixed [`DirichletConfig`]. Every call to
/// [`DirichletSampler::next_distribution`] returns a fresh vector.
///
/// # Examples
///
/// ```rust
/// use sampler_kernel::DirichletSampler;
///
/// let mut dirichlet = DirichletSampler::from_seed(5, 1.0, 42);
/// let distribution = dirichlet.next_distribution().unwrap();
///
/// assert_eq!(distribution.len(), 5);
/// assert!(distribution.iter().all(|&p| p > 0.0));
/// assert!((distribution.iter().sum::<f64>() - 1.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct DirichletSampler<B = StdRng> {
    sampler: Sampler<B>,
    config: DirichletConfig,
    /// `Gamma(partition[i] * magnitude, 1)`, unvalidated.
    components: Vec<GammaParams>,
}

impl DirichletSampler<StdRng> {
    /// Symmetric sampler of `size` dimensions with concentration `alpha`,
    /// seeded from entropy.
    ///
    /// `size > 0` and `alpha > 0` are the caller's responsibility; see
    /// [`DirichletConfig::symmetric`].
    pub fn new(size: usize, alpha: f64) -> Self {
        Self::with_sampler(DirichletConfig::symmetric(size, alpha), Sampler::new())
    }

    /// Symmetric sampler with an explicit seed.
    pub fn from_seed(size: usize, alpha: f64, seed: u64) -> Self {
        Self::with_sampler(
            DirichletConfig::symmetric(size, alpha),
            Sampler::from_seed(seed),
        )
    }

    /// Builds a sampler from a configuration, using its seed when present and
    /// entropy otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_kernel::{DirichletConfig, DirichletSampler};
    ///
    /// let config = DirichletConfig::builder().size(3).alpha(2.0).seed(7).build().unwrap();
    /// let mut a = DirichletSampler::from_config(config.clone());
    /// let mut b = DirichletSampler::from_config(config);
    /// assert_eq!(a.next_distribution().unwrap(), b.next_distribution().unwrap());
    /// ```
    pub fn from_config(config: DirichletConfig) -> Self {
        let sampler = match config.seed() {
            Some(seed) => Sampler::from_seed(seed),
            None => Sampler::new(),
        };
        Self::with_sampler(config, sampler)
    }
}

impl<B: BitSource> DirichletSampler<B> {
    /// Pairs a configuration with an existing sampler.
    pub fn with_sampler(config: DirichletConfig, sampler: Sampler<B>) -> Self {
        let components = config
            .concentrations()
            .map(|shape| GammaParams::new_unchecked(shape, 1.0, 0.0))
            .collect();
        tracing::debug!(
            size = config.size(),
            magnitude = config.magnitude(),
            "initialised Dirichlet sampler"
        );
        Self {
            sampler,
            config,
            components,
        }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &DirichletConfig {
        &self.config
    }

    /// Returns the number of dimensions.
    #[inline]
    pub fn size(&self) -> usize {
        self.config.size()
    }

    /// Returns the magnitude.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.config.magnitude()
    }

    /// Returns the partition.
    #[inline]
    pub fn partition(&self) -> &[f64] {
        self.config.partition()
    }

    /// Mutable access to the underlying sampler, for uniform and Gamma draws
    /// on the same stream.
    #[inline]
    pub fn sampler_mut(&mut self) -> &mut Sampler<B> {
        &mut self.sampler
    }

    /// Consumes the Dirichlet sampler and returns the underlying sampler.
    pub fn into_sampler(self) -> Sampler<B> {
        self.sampler
    }

    /// Draws one probability vector.
    ///
    /// Every entry lies in (0, 1] and the entries sum to 1 up to rounding.
    /// A dimension with concentration exactly 1 draws `-ln(U)`, which is
    /// infinite when `U = 0` (probability 2^-53); the vector is then NaN.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidParameter`] if a dimension's
    /// concentration is not strictly positive or exceeds
    /// [`MAX_SHAPE`](crate::gamma::MAX_SHAPE), which only happens when the
    /// unguarded [`DirichletConfig::symmetric`] was given a bad `alpha`.
    /// Nothing is drawn in that case.
    pub fn next_distribution(&mut self) -> Result<Vec<f64>, SamplerError> {
        self.check_components()?;

        let mut distribution = Vec::with_capacity(self.components.len());
        let mut sum = 0.0;
        for (i, params) in self.components.iter().enumerate() {
            let mut value = self.sampler.sample_gamma(params);
            if value <= 0.0 {
                tracing::trace!(dimension = i, raw = value, "clamped gamma draw to floor");
                value = COMPONENT_FLOOR;
            }
            sum += value;
            distribution.push(value);
        }

        for value in distribution.iter_mut() {
            *value /= sum;
        }
        Ok(distribution)
    }

    /// Draws `count` probability vectors in sequence.
    ///
    /// # Errors
    ///
    /// As for [`DirichletSampler::next_distribution`].
    pub fn next_distributions(&mut self, count: usize) -> Result<Vec<Vec<f64>>, SamplerError> {
        (0..count).map(|_| self.next_distribution()).collect()
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn check_components(&self) -> Result<(), SamplerError> {
        match self.components.iter().find(|p| !is_valid_shape(p.shape())) {
            Some(params) => Err(SamplerError::InvalidParameter {
                name: "alpha",
                value: params.shape(),
            }),
            None => Ok(()),
        }
    }
}
