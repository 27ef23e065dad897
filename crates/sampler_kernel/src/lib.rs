//! # Sampler Kernel
//!
//! Random variate generation for probabilistic models:
//! - 53-bit uniform deviates assembled from a pluggable bit source
//! - Gamma(α, β) + λ deviates via three shape regimes
//!   (Ahrens–Dieter GS for α < 1, inversion for α = 1, Best for α > 1)
//! - Dirichlet probability vectors via Gamma normalisation
//!
//! ## Layering
//!
//! ```text
//! DirichletSampler ──► Sampler::sample_gamma ──► Sampler::next_uniform ──► BitSource
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_kernel::{DirichletSampler, Sampler};
//!
//! let mut sampler = Sampler::from_seed(12345);
//! let u = sampler.next_uniform();
//! let g = sampler.next_gamma(0.5, 2.0, 0.0).unwrap();
//! assert!((0.0..1.0).contains(&u) && g >= 0.0);
//!
//! let mut dirichlet = DirichletSampler::from_seed(5, 1.0, 12345);
//! let theta = dirichlet.next_distribution().unwrap();
//! assert_eq!(theta.len(), 5);
//! ```
//!
//! ## Threading
//!
//! Every draw takes `&mut self`. Give each thread its own sampler (see
//! [`parallel`]) or wrap one in [`SharedSampler`].
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`DirichletConfig`] and
//!   [`GammaParams`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![allow(unknown_lints)]

pub mod bits;
pub mod dirichlet;
pub mod error;
pub mod gamma;
pub mod parallel;
mod sampler;
mod shared;

#[cfg(test)]
mod testing;

pub use dirichlet::{DirichletConfig, DirichletConfigBuilder, DirichletSampler, COMPONENT_FLOOR};
pub use error::{ConfigError, SamplerError};
pub use gamma::GammaParams;
pub use sampler::Sampler;
pub use shared::SharedSampler;
