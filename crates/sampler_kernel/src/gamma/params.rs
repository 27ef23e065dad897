//! Validated Gamma distribution parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SamplerError;

/// Largest accepted shape. Above it `3α - 0.75` overflows in Best's method.
pub const MAX_SHAPE: f64 = f64::MAX / 4.0;

/// Whether `shape` lies in `(0, MAX_SHAPE]`. False for NaN.
#[inline]
pub(crate) fn is_valid_shape(shape: f64) -> bool {
    shape > 0.0 && shape <= MAX_SHAPE
}

/// Shape, scale and shift of a shifted Gamma distribution.
///
/// A draw is `scale * g + shift` with `g ~ Gamma(shape, 1)`, so the density is
/// `x^(shape-1) exp(-x/scale) / (scale^shape Γ(shape))` before the shift. The
/// scale is not a rate. With the `serde` feature, deserialisation goes through
/// [`GammaParams::new`] and fails on the same inputs.
///
/// # Examples
///
/// ```rust
/// use sampler_kernel::GammaParams;
///
/// let params = GammaParams::new(5.0, 2.0, 3.0).unwrap();
/// assert_eq!(params.mean(), 13.0);
/// assert_eq!(params.variance(), 20.0);
///
/// assert!(GammaParams::new(0.0, 1.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGammaParams"))]
pub struct GammaParams {
    shape: f64,
    scale: f64,
    shift: f64,
}

impl GammaParams {
    /// Validates and creates a parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidParameter`] if `shape` or `scale` is not
    /// strictly positive (NaN included), or if `shape` exceeds [`MAX_SHAPE`].
    /// `shift` is unconstrained.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn new(shape: f64, scale: f64, shift: f64) -> Result<Self, SamplerError> {
        if !is_valid_shape(shape) {
            return Err(SamplerError::InvalidParameter {
                name: "alpha",
                value: shape,
            });
        }
        // Negated so that NaN is rejected too.
        if !(scale > 0.0) {
            return Err(SamplerError::InvalidParameter {
                name: "beta",
                value: scale,
            });
        }
        Ok(Self::new_unchecked(shape, scale, shift))
    }

    /// Unit-scale, unshifted parameters: `Gamma(shape, 1)`.
    ///
    /// # Errors
    ///
    /// As for [`GammaParams::new`].
    #[inline]
    pub fn with_shape(shape: f64) -> Result<Self, SamplerError> {
        Self::new(shape, 1.0, 0.0)
    }

    /// Gamma(1, 1), the unit exponential.
    #[inline]
    pub fn standard() -> Self {
        Self::new_unchecked(1.0, 1.0, 0.0)
    }

    #[inline]
    pub(crate) fn new_unchecked(shape: f64, scale: f64, shift: f64) -> Self {
        Self {
            shape,
            scale,
            shift,
        }
    }

    /// Returns the shape α.
    #[inline]
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Returns the scale β.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the location shift λ.
    #[inline]
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Theoretical mean, `αβ + λ`.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.shape * self.scale + self.shift
    }

    /// Theoretical variance, `αβ²`.
    #[inline]
    pub fn variance(&self) -> f64 {
        self.shape * self.scale * self.scale
    }
}

impl Default for GammaParams {
    fn default() -> Self {
        Self::standard()
    }
}

/// Unchecked wire form of [`GammaParams`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGammaParams {
    shape: f64,
    scale: f64,
    shift: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGammaParams> for GammaParams {
    type Error = SamplerError;

    fn try_from(raw: RawGammaParams) -> Result<Self, Self::Error> {
        Self::new(raw.shape, raw.scale, raw.shift)
    }
}
