use thiserror::Error;

use crate::stencil::{self, Position};

/// Fewest samples the differentiator accepts.
///
/// The one-sided stencils anchored one point in from each boundary span five
/// samples starting (or ending) at the neighboring index, so six samples are
/// needed before every window fits inside the data.
pub const MIN_POINTS: usize = 6;

/// Errors reported when the input sequences cannot be differentiated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    /// Too few samples for the stencil windows to fit.
    #[error("expected at least {required} samples, got {actual}")]
    TooFewPoints { actual: usize, required: usize },
    /// The abscissa and value sequences differ in length.
    #[error("abscissa and value sequences differ in length ({x_len} vs {f_len})")]
    LengthMismatch { x_len: usize, f_len: usize },
}

/// Approximates `f'` at every abscissa using fourth-order five-point stencils.
///
/// The symmetric stencil covers the interior; the two indices nearest each
/// boundary use the matching one-sided stencil, which only reaches inward.
/// The step size is taken as `x[1] - x[0]` and reused for every window, so
/// the abscissas must be uniformly spaced. Uniformity is *not* checked:
/// violating it yields numerically wrong (but finite) output. Build the grid
/// with [`UniformGrid`](crate::UniformGrid) to satisfy the precondition by
/// construction.
///
/// The computation is pure and deterministic: identical inputs produce
/// bit-identical output.
///
/// # Errors
///
/// Returns [`InvalidInputError`] if the sequences differ in length or hold
/// fewer than [`MIN_POINTS`] samples.
pub fn approximate_derivatives(x: &[f64], f: &[f64]) -> Result<Vec<f64>, InvalidInputError> {
    if x.len() != f.len() {
        return Err(InvalidInputError::LengthMismatch {
            x_len: x.len(),
            f_len: f.len(),
        });
    }
    if x.len() < MIN_POINTS {
        return Err(InvalidInputError::TooFewPoints {
            actual: x.len(),
            required: MIN_POINTS,
        });
    }

    let step = x[1] - x[0];
    let len = f.len();

    let derivatives = (0..len)
        .map(|i| match Position::of(i, len) {
            Position::First | Position::Second => stencil::forward(window(f, i), step),
            Position::Interior => stencil::central(window(f, i - 2), step),
            Position::SecondLast | Position::Last => stencil::backward(window(f, i - 4), step),
        })
        .collect();

    Ok(derivatives)
}

/// The five consecutive samples starting at `start`.
fn window(values: &[f64], start: usize) -> &[f64; 5] {
    values[start..start + 5]
        .try_into()
        .expect("validated input leaves every stencil window in range")
}
