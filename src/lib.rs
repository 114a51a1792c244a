//! Synthetic 2D datasets and decision-boundary sampling.
//!
//! # Crate Layout
//!
//! Datasets are produced by generators implementing the [`Generate`] trait.
//! Each generator draws its samples from a caller-provided random number
//! generator, so results are reproducible with a seeded one.  The
//! [`DatasetKind`] enumeration selects a generator by name.
//!
//! Decision boundaries are sampled on a square [`Grid`].  A
//! [`BoundaryCache`] holds one matrix per node and is filled either from
//! fixed input functions ([`input_nodes`]) or from any [`Evaluator`], such as
//! a trained model.
//!
//! # Available datasets
//!
//! ## Classification
//!
//! - [Two gaussians][TwoGauss]
//! - [XOR][Xor]
//! - [Circle][Circle]
//! - [Spiral][Spiral]
//!
//! ## Regression
//!
//! - [Plane][RegressPlane]
//! - [Gaussian mixture][RegressGaussian]
//!
//! # Example
//!
//! ```rust
//! use playground_data::DatasetKind;
//! use rand::SeedableRng as _;
//!
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(7);
//! let samples = DatasetKind::Spiral.generate(0.1, &mut rng);
//! assert_eq!(samples.len(), 500);
//! ```

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    rust_2018_idioms
)]

#[cfg(test)]
#[macro_use]
extern crate approx;

mod boundary;
pub mod color;
mod dataset;
mod error;
mod random;
mod scale;
mod split;


pub use crate::boundary::*;
pub use crate::dataset::*;
pub use crate::error::Error;
pub use crate::error::ErrorKind;
pub use crate::random::RandomSource;
pub use crate::scale::LinearScale;
pub use crate::split::split;

pub use nalgebra;
pub use rand;

/// A point of the plane, in data coordinates.
pub type Point2D = nalgebra::Vector2<f64>;

/// Bounds of the square area samples and boundaries live in.
pub const POINT_DOMAIN: [f64; 2] = [-6.0, 6.0];
