//! 48-bit linear congruential generator.
//!
//! The classic `drand48`-family recurrence
//! `x' = (0x5DEECE66D * x + 0xB) mod 2^48`, returning the top bits of the new
//! state. Statistically weak compared to `StdRng`, but its output stream is
//! fixed by the recurrence alone, which makes it the reference generator for
//! cross-platform regression values.

use super::BitSource;

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// 48-bit linear congruential bit source.
///
/// # Examples
///
/// ```rust
/// use sampler_kernel::bits::{BitSource, Lcg48};
///
/// let mut lcg = Lcg48::new(42);
/// assert_eq!(lcg.next_bits(32) as i32, -1_170_105_035);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg48 {
    state: u64,
}

impl Lcg48 {
    /// Creates a generator from `seed`.
    ///
    /// The seed is scrambled with the multiplier and truncated to 48 bits.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self {
            state: (seed ^ MULTIPLIER) & MASK,
        }
    }
}

impl BitSource for Lcg48 {
    #[inline]
    fn next_bits(&mut self, bits: u32) -> u32 {
        debug_assert!(bits <= 32, "at most 32 bits per batch, got {bits}");
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        (self.state >> (48 - bits)) as u32
    }
}
