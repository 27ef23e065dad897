//! Seeded sampler owning one bit source.
//!
//! [`Sampler`] is the single entry point for uniform and Gamma deviates. The
//! Gamma methods live in [`crate::gamma`]; this module holds construction and
//! the 53-bit uniform construction every other draw is built on.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bits::BitSource;

/// Bits taken from the first batch, placed in the high part of the mantissa.
const HIGH_BITS: u32 = 26;
/// Bits taken from the second batch, placed in the low part of the mantissa.
const LOW_BITS: u32 = 27;
/// 2^53, the number of distinct values a uniform deviate can take.
const UNIFORM_SCALE: f64 = (1u64 << (HIGH_BITS + LOW_BITS)) as f64;

/// Random variate sampler.
///
/// Holds its bit source privately; every draw goes through `&mut self`, which
/// serialises access to the generator state. Use one sampler per thread, or
/// [`SharedSampler`](crate::SharedSampler) when a single stream must be shared.
///
/// # Examples
///
/// ```rust
/// use sampler_kernel::Sampler;
///
/// let mut sampler = Sampler::from_seed(42);
///
/// let u = sampler.next_uniform();
/// assert!((0.0..1.0).contains(&u));
///
/// let g = sampler.next_gamma(2.0, 0.5, 0.0).unwrap();
/// assert!(g >= 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Sampler<B = StdRng> {
    /// The underlying bit source.
    source: B,
    /// Seed used for initialisation, when known.
    seed: Option<u64>,
}

impl Sampler<StdRng> {
    /// Creates a sampler backed by `StdRng` seeded with `seed`.
    ///
    /// The same seed always produces the same sequence of deviates for the
    /// same sequence of calls.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_kernel::Sampler;
    ///
    /// let mut a = Sampler::from_seed(12345);
    /// let mut b = Sampler::from_seed(12345);
    /// assert_eq!(a.next_uniform(), b.next_uniform());
    /// ```
    pub fn from_seed(seed: u64) -> Self {
        tracing::debug!(seed, "initialised sampler");
        Self {
            source: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a sampler seeded from operating-system entropy.
    ///
    /// The drawn seed is recorded and available through [`Sampler::seed`] so
    /// that a run can be replayed with [`Sampler::from_seed`].
    pub fn new() -> Self {
        Self::from_seed(rand::random())
    }
}

impl Default for Sampler<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BitSource> Sampler<B> {
    /// Creates a sampler around an existing bit source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_kernel::bits::Lcg48;
    /// use sampler_kernel::Sampler;
    ///
    /// let mut sampler = Sampler::with_source(Lcg48::new(42));
    /// assert_eq!(sampler.next_uniform(), 0.7275636800328681);
    /// ```
    pub fn with_source(source: B) -> Self {
        tracing::debug!("initialised sampler from external bit source");
        Self { source, seed: None }
    }

    /// Returns the seed used for initialisation, or `None` for samplers built
    /// with [`Sampler::with_source`].
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Consumes the sampler and returns its bit source.
    pub fn into_source(self) -> B {
        self.source
    }

    /// Returns a uniform deviate in [0, 1) with 53 bits of precision.
    ///
    /// A 26-bit batch forms the high bits and a 27-bit batch the low bits of a
    /// 53-bit integer, which is then divided by 2^53. Every representable
    /// multiple of 2^-53 in [0, 1) is reachable.
    ///
    /// Mean 0.5, variance 1/12.
    #[inline]
    pub fn next_uniform(&mut self) -> f64 {
        let high = u64::from(self.source.next_bits(HIGH_BITS));
        let low = u64::from(self.source.next_bits(LOW_BITS));
        ((high << LOW_BITS) + low) as f64 / UNIFORM_SCALE
    }

    /// Returns a uniform deviate in [a, b).
    ///
    /// Computed as `a + (b - a) * next_uniform()`. Mean (a + b) / 2,
    /// variance (b - a)^2 / 12. No ordering of `a` and `b` is enforced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_kernel::Sampler;
    ///
    /// let mut sampler = Sampler::from_seed(1);
    /// let x = sampler.next_uniform_in(-2.0, 3.0);
    /// assert!((-2.0..3.0).contains(&x));
    /// ```
    #[inline]
    pub fn next_uniform_in(&mut self, a: f64, b: f64) -> f64 {
        a + (b - a) * self.next_uniform()
    }

    /// Fills the buffer with uniform deviates in [0, 1).
    ///
    /// Zero allocation; empty buffers are a no-op.
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_uniform();
        }
    }
}
