//! Fourth-order finite-difference first derivatives on uniform grids.
//!
//! The crate approximates `f'` from equally spaced samples of `f` using
//! five-point stencils: a symmetric formula in the interior and one-sided
//! formulas where a symmetric stencil would need data beyond the boundary.
//! A companion helper reports the theoretical truncation-error bound of the
//! stencil family.

mod derivative;
mod grid;
mod truncation;

pub mod stencil;

pub use derivative::{InvalidInputError, MIN_POINTS, approximate_derivatives};
pub use grid::{GridError, UniformGrid};
pub use truncation::truncation_bound;
