//! # Gamma Variates
//!
//! Gamma(α, β) + λ deviates built on [`Sampler::next_uniform`]. The shape
//! selects one of three regimes:
//!
//! | Shape   | Method                         | Uniforms per attempt |
//! |---------|--------------------------------|----------------------|
//! | α < 1   | Ahrens–Dieter GS rejection     | 2                    |
//! | α = 1   | Inversion, `-ln(U)`            | 1 (no rejection)     |
//! | α > 1   | Best's rejection (XG)          | 2                    |
//!
//! ## Termination
//!
//! The rejection loops carry no iteration cap. A cap would silently truncate
//! the tail of the acceptance region and bias the output. The expected number
//! of attempts is between one and two for every shape, and the probability of
//! needing `k` attempts decays geometrically in `k`. Shapes above
//! [`MAX_SHAPE`] are rejected: there `3α - 0.75` overflows, every acceptance
//! test compares against NaN and the loop would never exit.
//!
//! ## Algorithm References
//!
//! - Ahrens, J. H. & Dieter, U. (1974). "Computer methods for sampling from
//!   gamma, beta, Poisson and binomial distributions". Computing 12.
//! - Best, D. J. (1978). "Letter to the editor". Applied Statistics 27;
//!   see Devroye, L. (1986). "Non-Uniform Random Variate Generation", p. 410.

mod params;

pub use params::{GammaParams, MAX_SHAPE};

use std::f64::consts::E;

use crate::bits::BitSource;
use crate::error::SamplerError;
use crate::sampler::Sampler;

pub(crate) use params::is_valid_shape;

impl<B: BitSource> Sampler<B> {
    /// Draws from Gamma(α, β) + λ.
    ///
    /// Parameters are validated before any deviate is drawn, so a failed call
    /// leaves the stream untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidParameter`] if `alpha <= 0` or
    /// `beta <= 0`, or if `alpha > MAX_SHAPE`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_kernel::{Sampler, SamplerError};
    ///
    /// let mut sampler = Sampler::from_seed(7);
    /// let x = sampler.next_gamma(0.5, 2.0, 10.0).unwrap();
    /// assert!(x >= 10.0);
    ///
    /// assert!(matches!(
    ///     sampler.next_gamma(1.0, 0.0, 0.0),
    ///     Err(SamplerError::InvalidParameter { name: "beta", .. })
    /// ));
    /// ```
    pub fn next_gamma(&mut self, alpha: f64, beta: f64, lambda: f64) -> Result<f64, SamplerError> {
        let params = GammaParams::new(alpha, beta, lambda).inspect_err(|e| {
            tracing::debug!(alpha, beta, lambda, error = %e, "rejected gamma parameters");
        })?;
        Ok(self.sample_gamma(&params))
    }

    /// Draws from Gamma(α, β), unshifted.
    ///
    /// # Errors
    ///
    /// As for [`Sampler::next_gamma`].
    #[inline]
    pub fn next_gamma_scaled(&mut self, alpha: f64, beta: f64) -> Result<f64, SamplerError> {
        self.next_gamma(alpha, beta, 0.0)
    }

    /// Draws from Gamma(α, 1).
    ///
    /// # Errors
    ///
    /// As for [`Sampler::next_gamma`].
    #[inline]
    pub fn next_gamma_shape(&mut self, alpha: f64) -> Result<f64, SamplerError> {
        self.next_gamma(alpha, 1.0, 0.0)
    }

    /// Draws from Gamma(1, 1): mean 1, variance 1.
    #[inline]
    pub fn next_standard_gamma(&mut self) -> f64 {
        self.sample_gamma(&GammaParams::standard())
    }

    /// Draws from already validated parameters.
    pub fn sample_gamma(&mut self, params: &GammaParams) -> f64 {
        let alpha = params.shape();
        let gamma = if alpha < 1.0 {
            self.gamma_ahrens_dieter(alpha)
        } else if alpha == 1.0 {
            self.gamma_exponential()
        } else {
            self.gamma_best(alpha)
        };
        params.scale() * gamma + params.shift()
    }

    /// Fills the buffer with draws from `params`.
    ///
    /// Zero allocation; empty buffers are a no-op.
    pub fn fill_gamma(&mut self, params: &GammaParams, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.sample_gamma(params);
        }
    }

    /// GS algorithm for `0 < alpha < 1`.
    fn gamma_ahrens_dieter(&mut self, alpha: f64) -> f64 {
        let b = 1.0 + alpha / E;
        loop {
            let p = b * self.next_uniform();
            if p > 1.0 {
                // p < b, so the log argument stays in (0, 1/e).
                let gamma = -((b - p) / alpha).ln();
                if self.next_uniform() <= gamma.powf(alpha - 1.0) {
                    return gamma;
                }
            } else {
                let gamma = p.powf(1.0 / alpha);
                if self.next_uniform() <= (-gamma).exp() {
                    return gamma;
                }
            }
        }
    }

    /// Inversion of the unit exponential CDF.
    #[inline]
    fn gamma_exponential(&mut self) -> f64 {
        -self.next_uniform().ln()
    }

    /// Best's algorithm for `alpha > 1`.
    fn gamma_best(&mut self, alpha: f64) -> f64 {
        let b = alpha - 1.0;
        let c = 3.0 * alpha - 0.75;
        loop {
            let u = self.next_uniform();
            let v = self.next_uniform();

            let w = u * (1.0 - u);
            let y = (c / w).sqrt() * (u - 0.5);
            let gamma = b + y;

            // u == 0 gives y = -inf and lands here too.
            if gamma < 0.0 {
                continue;
            }

            let z = 64.0 * w * w * w * v * v;
            if z <= 1.0 - 2.0 * y * y / gamma {
                return gamma;
            }
            if z.ln() <= 2.0 * (b * (gamma / b).ln() - y) {
                return gamma;
            }
        }
    }
}
