//! # Bit Sources
//!
//! The sampler never draws floating-point values from its generator directly.
//! It asks a [`BitSource`] for batches of raw bits and assembles the uniform
//! deviate itself, so any generator able to produce "N random bits" can back
//! a [`Sampler`](crate::Sampler).
//!
//! ## Module Structure
//!
//! - [`BitSource`]: the batch-of-N-bits capability
//! - [`Lcg48`]: 48-bit linear congruential reference generator
//! - `StdRng` (from `rand`): the default source, seeded via `seed_from_u64`
//!
//! ## Contract
//!
//! `next_bits(n)` must return a value below `2^n` whose bits are independent
//! across calls for a fixed `n`. Values of `n` outside `1..=32` are never
//! requested by the sampler.

mod lcg;

pub use lcg::Lcg48;

use rand::rngs::StdRng;
use rand::RngCore;

/// Source of uniformly distributed random bits.
///
/// Implementors own their generator state; the sampler holds exactly one
/// source and mutates it through `&mut self` only.
///
/// # Examples
///
/// ```rust
/// use sampler_kernel::bits::{BitSource, Lcg48};
///
/// let mut source = Lcg48::new(7);
/// let bits = source.next_bits(26);
/// assert!(bits < 1 << 26);
/// ```
pub trait BitSource {
    /// Returns `bits` random low-order bits (`1 <= bits <= 32`).
    fn next_bits(&mut self, bits: u32) -> u32;
}

impl BitSource for StdRng {
    /// Takes the high bits of a 32-bit draw.
    #[inline]
    fn next_bits(&mut self, bits: u32) -> u32 {
        debug_assert!(bits <= 32, "at most 32 bits per batch, got {bits}");
        self.next_u32().checked_shr(32 - bits).unwrap_or(0)
    }
}

impl<B: BitSource + ?Sized> BitSource for &mut B {
    #[inline]
    fn next_bits(&mut self, bits: u32) -> u32 {
        (**self).next_bits(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_std_rng_bits_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for bits in 1..=32u32 {
            for _ in 0..100 {
                let value = u64::from(rng.next_bits(bits));
                assert!(value < 1u64 << bits, "{} bits gave {}", bits, value);
            }
        }
    }

    #[test]
    fn test_std_rng_zero_bits() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(rng.next_bits(0), 0);
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut a = Lcg48::new(3);
        let mut b = Lcg48::new(3);
        let expected = a.next_bits(27);
        let mut borrowed = &mut b;
        assert_eq!(BitSource::next_bits(&mut borrowed, 27), expected);
    }
}
