//! Shared scenario for the fivepoint examples.
//!
//! Every example differentiates `f(x) = e^x` over `[-1, 1]` for a few grid
//! resolutions, mirroring the tables and plots the examples render.

use thiserror::Error;

use fivepoint_core::{GridError, InvalidInputError, UniformGrid};

/// Grid resolutions shared by the table and plot examples.
pub const POINT_COUNTS: [usize; 3] = [11, 21, 41];

/// Derivative approximations and truncation bounds for `exp` on one grid.
pub struct ExpScenario {
    pub grid: UniformGrid,
    pub samples: Vec<f64>,
    pub derivatives: Vec<f64>,
    pub bounds: Vec<f64>,
}

/// Errors from building an [`ExpScenario`].
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Input(#[from] InvalidInputError),
}

impl ExpScenario {
    /// Differentiates `exp` sampled on `count` points over `[-1, 1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is degenerate or too small for the
    /// stencils.
    pub fn new(count: usize) -> Result<Self, ScenarioError> {
        let grid = UniformGrid::new(-1.0, 1.0, count)?;
        let samples = grid.sample(f64::exp);
        let derivatives = fivepoint_core::approximate_derivatives(grid.points(), &samples)?;
        let bounds = fivepoint_core::truncation_bound(grid.points(), f64::exp)?;

        Ok(ExpScenario {
            grid,
            samples,
            derivatives,
            bounds,
        })
    }
}
