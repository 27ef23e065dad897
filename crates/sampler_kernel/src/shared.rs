//! Mutex-guarded sampler for sharing one stream between threads.
//!
//! Each public call holds the lock for its full duration, so the two bit
//! batches of a uniform deviate, and every attempt of a rejection loop, come
//! from one uninterrupted stretch of the stream. Interleaving between threads
//! is at call granularity and its order is not specified.
//!
//! Prefer one [`Sampler`] per thread where possible; it needs no locking.

use std::sync::{Mutex, MutexGuard};

use rand::rngs::StdRng;

use crate::bits::BitSource;
use crate::error::SamplerError;
use crate::sampler::Sampler;

/// Thread-safe wrapper around a [`Sampler`].
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
/// use sampler_kernel::SharedSampler;
///
/// let shared = Arc::new(SharedSampler::from_seed(42));
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let shared = Arc::clone(&shared);
///         thread::spawn(move || shared.next_gamma(2.0, 1.0, 0.0).unwrap())
///     })
///     .collect();
///
/// for handle in handles {
///     assert!(handle.join().unwrap() >= 0.0);
/// }
/// ```
#[derive(Debug)]
pub struct SharedSampler<B = StdRng> {
    inner: Mutex<Sampler<B>>,
}

impl SharedSampler<StdRng> {
    /// Creates a shared sampler seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(Sampler::from_seed(seed))
    }
}

impl<B: BitSource> SharedSampler<B> {
    /// Wraps an existing sampler.
    pub fn new(sampler: Sampler<B>) -> Self {
        Self {
            inner: Mutex::new(sampler),
        }
    }

    /// Runs `f` with exclusive access to the sampler.
    ///
    /// Use this to make a sequence of draws atomic with respect to other
    /// threads.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Sampler<B>) -> R,
    {
        f(&mut *self.lock())
    }

    /// See [`Sampler::next_uniform`].
    pub fn next_uniform(&self) -> f64 {
        self.lock().next_uniform()
    }

    /// See [`Sampler::next_uniform_in`].
    pub fn next_uniform_in(&self, a: f64, b: f64) -> f64 {
        self.lock().next_uniform_in(a, b)
    }

    /// See [`Sampler::next_gamma`].
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidParameter`] for non-positive shape or
    /// scale.
    pub fn next_gamma(&self, alpha: f64, beta: f64, lambda: f64) -> Result<f64, SamplerError> {
        self.lock().next_gamma(alpha, beta, lambda)
    }

    /// See [`Sampler::next_standard_gamma`].
    pub fn next_standard_gamma(&self) -> f64 {
        self.lock().next_standard_gamma()
    }

    /// Consumes the wrapper and returns the sampler.
    pub fn into_inner(self) -> Sampler<B> {
        self.inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // A panic while holding the lock cannot leave the sampler half-updated
    // between calls, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Sampler<B>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
