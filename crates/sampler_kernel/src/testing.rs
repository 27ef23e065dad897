//! Deterministic bit source for unit tests.

use std::collections::VecDeque;

use crate::bits::BitSource;

/// Replays a fixed script of bit batches, in order.
///
/// Panics when the script runs dry, which flags a test that consumed more
/// deviates than it planned for.
pub(crate) struct ScriptedBits {
    batches: VecDeque<u32>,
}

impl ScriptedBits {
    pub(crate) fn new(batches: Vec<u32>) -> Self {
        Self {
            batches: batches.into(),
        }
    }

    /// Scripts the exact batches that make `next_uniform` return each of
    /// `values` in turn. Every value must be a multiple of 2^-53 in [0, 1).
    pub(crate) fn from_uniforms(values: &[f64]) -> Self {
        let mut batches = Vec::with_capacity(values.len() * 2);
        for &u in values {
            let bits = (u * (1u64 << 53) as f64) as u64;
            batches.push((bits >> 27) as u32);
            batches.push((bits & ((1 << 27) - 1)) as u32);
        }
        Self::new(batches)
    }
}

impl BitSource for ScriptedBits {
    fn next_bits(&mut self, bits: u32) -> u32 {
        let value = self
            .batches
            .pop_front()
            .expect("scripted bit source exhausted");
        assert!(
            u64::from(value) < 1u64 << bits,
            "scripted batch {value} does not fit in {bits} bits"
        );
        value
    }
}
