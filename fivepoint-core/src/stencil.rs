//! Five-point finite-difference stencils for the first derivative.
//!
//! Every formula here is fourth-order accurate on a uniform grid and is
//! expressed over the minimal window of five consecutive samples, so callers
//! never repeat index arithmetic. All coefficients share the `12 h`
//! denominator.

/// Where an evaluation index sits within the sampled sequence.
///
/// The position determines which stencil applies: the two leading indices use
/// the forward formula, the two trailing indices use the backward formula, and
/// everything in between uses the symmetric formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    First,
    Second,
    Interior,
    SecondLast,
    Last,
}

impl Position {
    /// Classifies `index` within a sequence of `len` samples.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    pub fn of(index: usize, len: usize) -> Self {
        assert!(index < len, "index {index} out of range for length {len}");

        match index {
            0 => Position::First,
            1 => Position::Second,
            i if i == len - 2 => Position::SecondLast,
            i if i == len - 1 => Position::Last,
            _ => Position::Interior,
        }
    }
}

/// Forward stencil: the derivative at `window[0]`.
///
/// Used at the first two indices, where no samples exist to the left.
#[must_use]
pub fn forward(window: &[f64; 5], step: f64) -> f64 {
    (-25.0 * window[0] + 48.0 * window[1] - 36.0 * window[2] + 16.0 * window[3] - 3.0 * window[4])
        / (12.0 * step)
}

/// Central stencil: the derivative at `window[2]`.
///
/// The symmetric five-point formula; its coefficients `1, -8, 0, 8, -1` sum
/// to zero, so it vanishes on constant input.
#[must_use]
pub fn central(window: &[f64; 5], step: f64) -> f64 {
    (window[0] - 8.0 * window[1] + 8.0 * window[3] - window[4]) / (12.0 * step)
}

/// Backward stencil: the derivative at `window[4]`.
///
/// The mirror of [`forward`], used at the last two indices. Both trailing
/// positions reach backward from their own index rather than past the final
/// sample, since no data exists beyond the boundary.
#[must_use]
pub fn backward(window: &[f64; 5], step: f64) -> f64 {
    (-25.0 * window[4] + 48.0 * window[3] - 36.0 * window[2] + 16.0 * window[1] - 3.0 * window[0])
        / (12.0 * step)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn position_assignment_for_smallest_grid() {
        let expected = [
            Position::First,
            Position::Second,
            Position::Interior,
            Position::Interior,
            Position::SecondLast,
            Position::Last,
        ];

        for (index, position) in expected.into_iter().enumerate() {
            assert_eq!(Position::of(index, 6), position, "index {index}");
        }
    }

    #[test]
    fn central_vanishes_on_constant_input() {
        assert_eq!(central(&[3.5; 5], 0.1), 0.0);
    }

    #[test]
    fn central_is_antisymmetric_under_window_reversal() {
        let window = [1.0, 2.0, -0.5, 4.0, 0.25];
        let reversed = [0.25, 4.0, -0.5, 2.0, 1.0];

        assert_relative_eq!(central(&window, 0.1), -central(&reversed, 0.1));
    }

    #[test]
    fn forward_and_backward_mirror_each_other() {
        let window = [1.0, 2.0, -0.5, 4.0, 0.25];
        let reversed = [0.25, 4.0, -0.5, 2.0, 1.0];

        assert_relative_eq!(forward(&window, 0.1), -backward(&reversed, 0.1));
    }

    #[test]
    fn stencils_are_exact_on_a_line() {
        // f(x) = 2x + 1 sampled at x = 0, h, 2h, ...
        let step = 0.25;
        let window = [1.0, 1.5, 2.0, 2.5, 3.0];

        assert_relative_eq!(forward(&window, step), 2.0);
        assert_relative_eq!(central(&window, step), 2.0);
        assert_relative_eq!(backward(&window, step), 2.0);
    }
}
