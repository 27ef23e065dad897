//! Integration tests for the statistical contract of the public API.
//!
//! Each test exercises one observable property of the samplers through the
//! crate's public surface only.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use sampler_kernel::bits::Lcg48;
use sampler_kernel::{DirichletSampler, Sampler, SamplerError};

fn mean_and_variance(samples: &[f64]) -> (f64, f64) {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, variance)
}

// ============================================================================
// Uniform deviates
// ============================================================================

#[test]
fn test_uniform_moments() {
    let mut sampler = Sampler::from_seed(42);
    let samples: Vec<f64> = (0..200_000).map(|_| sampler.next_uniform()).collect();
    let (mean, variance) = mean_and_variance(&samples);
    assert_abs_diff_eq!(mean, 0.5, epsilon = 0.005);
    assert_abs_diff_eq!(variance, 1.0 / 12.0, epsilon = 0.002);
}

#[test]
fn test_uniform_interval_moments() {
    let mut sampler = Sampler::from_seed(43);
    let (a, b) = (-3.0, 5.0);
    let samples: Vec<f64> = (0..200_000).map(|_| sampler.next_uniform_in(a, b)).collect();
    assert!(samples.iter().all(|&x| x >= a && x < b));
    let (mean, variance) = mean_and_variance(&samples);
    assert_abs_diff_eq!(mean, (a + b) / 2.0, epsilon = 0.05);
    assert_abs_diff_eq!(variance, (b - a) * (b - a) / 12.0, epsilon = 0.1);
}

#[test]
fn test_reference_generator_stream() {
    let mut sampler = Sampler::with_source(Lcg48::new(42));
    assert_eq!(sampler.next_uniform(), 0.7275636800328681);
    assert_eq!(sampler.next_uniform(), 0.6832234717598454);
    assert_eq!(sampler.next_uniform(), 0.30871945533265976);
}

// ============================================================================
// Gamma deviates
// ============================================================================

#[test]
fn test_gamma_rejects_invalid_shape_and_scale() {
    let mut sampler = Sampler::from_seed(1);
    for (alpha, beta) in [(0.0, 1.0), (-1.0, 1.0), (1.0, 0.0), (1.0, -5.0)] {
        assert!(matches!(
            sampler.next_gamma(alpha, beta, 0.0),
            Err(SamplerError::InvalidParameter { .. })
        ));
    }
}

#[test]
fn test_exponential_case_moments() {
    let mut sampler = Sampler::from_seed(8);
    let samples: Vec<f64> = (0..200_000).map(|_| sampler.next_standard_gamma()).collect();
    let (mean, variance) = mean_and_variance(&samples);
    assert_abs_diff_eq!(mean, 1.0, epsilon = 0.02);
    assert_abs_diff_eq!(variance, 1.0, epsilon = 0.05);
}

#[test]
fn test_gamma_branch_moments() {
    let mut sampler = Sampler::from_seed(2718);
    for (alpha, beta, lambda) in [(0.5, 1.0, 0.0), (5.0, 1.0, 0.0), (0.5, 3.0, 2.0), (5.0, 0.5, -1.0)] {
        let samples: Vec<f64> = (0..150_000)
            .map(|_| sampler.next_gamma(alpha, beta, lambda).unwrap())
            .collect();
        let (mean, variance) = mean_and_variance(&samples);
        let expected_mean = alpha * beta + lambda;
        let expected_variance = alpha * beta * beta;
        assert_abs_diff_eq!(mean, expected_mean, epsilon = 0.03 * expected_mean.abs().max(1.0));
        assert_abs_diff_eq!(variance, expected_variance, epsilon = 0.06 * expected_variance);
    }
}

#[test]
fn test_convenience_forms_share_the_full_form() {
    let mut a = Sampler::from_seed(31);
    let mut b = Sampler::from_seed(31);
    assert_eq!(a.next_standard_gamma(), b.next_gamma(1.0, 1.0, 0.0).unwrap());
    assert_eq!(a.next_gamma_shape(0.7).unwrap(), b.next_gamma(0.7, 1.0, 0.0).unwrap());
    assert_eq!(
        a.next_gamma_scaled(3.0, 2.0).unwrap(),
        b.next_gamma(3.0, 2.0, 0.0).unwrap()
    );
}

// ============================================================================
// Dirichlet vectors
// ============================================================================

#[test]
fn test_dirichlet_unit_concentration() {
    let mut dirichlet = DirichletSampler::new(5, 1.0);
    let distribution = dirichlet.next_distribution().unwrap();
    assert_eq!(distribution.len(), 5);
    assert!(distribution.iter().all(|&p| p > 0.0));
    assert_abs_diff_eq!(distribution.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_dirichlet_low_concentration() {
    let mut dirichlet = DirichletSampler::from_seed(3, 0.01, 2024);
    let mut totals = [0.0; 3];
    for _ in 0..1000 {
        let distribution = dirichlet.next_distribution().unwrap();
        assert!(distribution.iter().all(|&p| p > 0.0));
        for (total, p) in totals.iter_mut().zip(&distribution) {
            *total += p;
        }
    }
    for total in totals {
        assert_abs_diff_eq!(total / 1000.0, 1.0 / 3.0, epsilon = 0.08);
    }
}

#[test]
fn test_dirichlet_seed_determinism() {
    let mut a = DirichletSampler::from_seed(6, 0.7, 5);
    let mut b = DirichletSampler::from_seed(6, 0.7, 5);
    assert_eq!(
        a.next_distributions(100).unwrap(),
        b.next_distributions(100).unwrap()
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Uniform deviates stay in [0, 1) for every seed.
    #[test]
    fn prop_uniform_in_unit_interval(seed in any::<u64>()) {
        let mut sampler = Sampler::from_seed(seed);
        for _ in 0..1000 {
            let u = sampler.next_uniform();
            prop_assert!((0.0..1.0).contains(&u), "uniform {} out of range (seed={})", u, seed);
        }
    }

    /// Scaled deviates stay in [a, b).
    #[test]
    fn prop_uniform_in_interval(
        seed in any::<u64>(),
        a in -1e3..1e3f64,
        width in 1.0..1e3f64,
    ) {
        let b = a + width;
        let mut sampler = Sampler::from_seed(seed);
        for _ in 0..100 {
            let x = sampler.next_uniform_in(a, b);
            prop_assert!(x >= a && x < b, "{} outside [{}, {})", x, a, b);
        }
    }

    /// Identical seeds and call sequences give identical outputs.
    #[test]
    fn prop_mixed_call_determinism(seed in any::<u64>()) {
        let mut a = Sampler::from_seed(seed);
        let mut b = Sampler::from_seed(seed);
        for i in 0..200 {
            match i % 3 {
                0 => prop_assert_eq!(a.next_uniform(), b.next_uniform()),
                1 => prop_assert_eq!(a.next_gamma_shape(0.4).unwrap(), b.next_gamma_shape(0.4).unwrap()),
                _ => prop_assert_eq!(a.next_gamma(6.0, 2.0, 1.0).unwrap(), b.next_gamma(6.0, 2.0, 1.0).unwrap()),
            }
        }
    }
}
