//! Parallel batch sampling of Dirichlet vectors.
//!
//! Work is split into fixed-size chunks and each chunk gets its own
//! [`DirichletSampler`], seeded from the base seed and the chunk index. No
//! sampler is shared between threads, and the output depends only on
//! `(config, count, base_seed)`, not on the size of the Rayon pool.

use rayon::prelude::*;

use crate::dirichlet::{DirichletConfig, DirichletSampler};
use crate::error::SamplerError;
use crate::sampler::Sampler;

/// Number of vectors drawn by one chunk sampler.
pub const CHUNK_SIZE: usize = 1024;

/// Golden-ratio increment used to spread chunk seeds.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seed of the sampler that draws chunk `chunk`.
#[inline]
pub fn chunk_seed(base_seed: u64, chunk: usize) -> u64 {
    base_seed.wrapping_add(SEED_STRIDE.wrapping_mul(chunk as u64 + 1))
}

/// Draws `count` Dirichlet vectors in parallel.
///
/// The configuration's own seed is ignored; chunk samplers are seeded with
/// [`chunk_seed`]. Vector `i` is drawn by chunk `i / CHUNK_SIZE`.
///
/// # Errors
///
/// Returns [`SamplerError::InvalidParameter`] if a concentration of `config`
/// is not strictly positive.
///
/// # Examples
///
/// ```rust
/// use sampler_kernel::parallel::sample_distributions_parallel;
/// use sampler_kernel::DirichletConfig;
///
/// let config = DirichletConfig::symmetric(8, 0.5);
/// let a = sample_distributions_parallel(&config, 5000, 42).unwrap();
/// let b = sample_distributions_parallel(&config, 5000, 42).unwrap();
///
/// assert_eq!(a.len(), 5000);
/// assert_eq!(a, b);
/// ```
pub fn sample_distributions_parallel(
    config: &DirichletConfig,
    count: usize,
    base_seed: u64,
) -> Result<Vec<Vec<f64>>, SamplerError> {
    let chunks = count.div_ceil(CHUNK_SIZE);
    tracing::debug!(
        count,
        chunks,
        chunk_size = CHUNK_SIZE,
        base_seed,
        "sampling Dirichlet vectors in parallel"
    );

    let per_chunk: Vec<Vec<Vec<f64>>> = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let len = CHUNK_SIZE.min(count - chunk * CHUNK_SIZE);
            let sampler = Sampler::from_seed(chunk_seed(base_seed, chunk));
            DirichletSampler::with_sampler(config.clone(), sampler).next_distributions(len)
        })
        .collect::<Result<_, _>>()?;

    Ok(per_chunk.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_and_simplex() {
        let config = DirichletConfig::symmetric(4, 1.0);
        let draws = sample_distributions_parallel(&config, 2 * CHUNK_SIZE + 17, 1).unwrap();
        assert_eq!(draws.len(), 2 * CHUNK_SIZE + 17);
        for d in &draws {
            assert_eq!(d.len(), 4);
            assert!((d.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_batch() {
        let config = DirichletConfig::symmetric(4, 1.0);
        assert!(sample_distributions_parallel(&config, 0, 1)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_chunk_matches_sequential_sampler() {
        let config = DirichletConfig::symmetric(3, 2.0);
        let draws = sample_distributions_parallel(&config, CHUNK_SIZE + 5, 77).unwrap();

        let mut second =
            DirichletSampler::with_sampler(config, Sampler::from_seed(chunk_seed(77, 1)));
        for d in &draws[CHUNK_SIZE..] {
            assert_eq!(d, &second.next_distribution().unwrap());
        }
    }

    #[test]
    fn test_independent_of_pool_size() {
        let config = DirichletConfig::symmetric(5, 0.3);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap();
        let single = pool
            .install(|| sample_distributions_parallel(&config, 3000, 9))
            .unwrap();
        let default = sample_distributions_parallel(&config, 3000, 9).unwrap();
        assert_eq!(single, default);
    }

    #[test]
    fn test_invalid_config_propagates() {
        let config = DirichletConfig::symmetric(2, -1.0);
        assert!(sample_distributions_parallel(&config, 10, 0).is_err());
    }

    #[test]
    fn test_chunk_seeds_distinct() {
        let seeds: std::collections::HashSet<u64> = (0..1000).map(|c| chunk_seed(0, c)).collect();
        assert_eq!(seeds.len(), 1000);
    }
}
