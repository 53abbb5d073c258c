use thiserror::Error;

/// Errors that can occur when constructing a [`UniformGrid`].
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    /// Fewer than two points were requested.
    #[error("a grid needs at least two points, got {0}")]
    TooFewPoints(usize),
    /// The domain is empty or reversed.
    #[error("grid domain is empty: start {start} is not below end {end}")]
    EmptyDomain { start: f64, end: f64 },
}

/// Evenly spaced abscissas over a closed interval.
///
/// The differentiator assumes constant spacing but does not verify it;
/// building abscissas through `UniformGrid` satisfies that precondition by
/// construction.
///
/// # Examples
///
/// ```
/// use fivepoint_core::UniformGrid;
///
/// let grid = UniformGrid::new(-1.0, 1.0, 11).unwrap();
///
/// assert_eq!(grid.points().len(), 11);
/// assert_eq!(grid.step(), 0.2);
/// assert_eq!(grid.points()[0], -1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UniformGrid {
    points: Vec<f64>,
    step: f64,
}

impl UniformGrid {
    /// Creates a grid of `count` points from `start` to `end` inclusive.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if `count < 2` or if `start >= end`.
    pub fn new(start: f64, end: f64, count: usize) -> Result<Self, GridError> {
        if count < 2 {
            return Err(GridError::TooFewPoints(count));
        }
        if start >= end {
            return Err(GridError::EmptyDomain { start, end });
        }

        #[allow(clippy::cast_precision_loss)]
        let step = (end - start) / (count - 1) as f64;

        #[allow(clippy::cast_precision_loss)]
        let points = (0..count).map(|i| start + i as f64 * step).collect();

        Ok(UniformGrid { points, step })
    }

    /// The abscissas, in increasing order.
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// The constant spacing between consecutive abscissas.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Evaluates `f` at every abscissa.
    #[must_use]
    pub fn sample(&self, f: impl Fn(f64) -> f64) -> Vec<f64> {
        self.points.iter().map(|&x| f(x)).collect()
    }
}
