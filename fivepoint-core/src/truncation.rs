use crate::derivative::InvalidInputError;

/// Pointwise truncation-error bound for the five-point stencil family.
///
/// Returns `|exact(x_i)| * h^4 / 30` for every abscissa, where `h` is the
/// grid spacing `x[1] - x[0]` and `exact` is the underlying function being
/// differentiated. This is the theoretical bound for a fourth-order stencil,
/// *not* a measured residual against any computed derivative: it needs the
/// exact function and the step, and is independent of the differentiator's
/// numeric output.
///
/// # Errors
///
/// Returns [`InvalidInputError::TooFewPoints`] if fewer than two abscissas
/// are supplied, since no step can be derived.
pub fn truncation_bound(
    x: &[f64],
    exact: impl Fn(f64) -> f64,
) -> Result<Vec<f64>, InvalidInputError> {
    if x.len() < 2 {
        return Err(InvalidInputError::TooFewPoints {
            actual: x.len(),
            required: 2,
        });
    }

    let step = x[1] - x[0];
    let scale = step.powi(4) / 30.0;

    Ok(x.iter().map(|&x| (exact(x) * scale).abs()).collect())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn matches_the_closed_form_for_exp() {
        let x = [0.0, 0.2, 0.4, 0.6];

        let bounds = truncation_bound(&x, f64::exp).unwrap();

        assert_eq!(bounds.len(), x.len());
        for (x, bound) in x.iter().zip(&bounds) {
            assert_relative_eq!(*bound, x.exp() * (0.2_f64.powi(4) / 30.0));
        }
    }

    #[test]
    fn bound_is_nonnegative_for_negative_functions() {
        let x = [0.0, 0.5, 1.0];

        let bounds = truncation_bound(&x, |x| -x.exp()).unwrap();

        assert!(bounds.iter().all(|b| *b >= 0.0));
    }

    #[test]
    fn halving_the_step_divides_the_bound_by_sixteen() {
        let coarse = [0.0, 0.2, 0.4];
        let fine = [0.0, 0.1, 0.2];

        let coarse_bound = truncation_bound(&coarse, f64::exp).unwrap()[0];
        let fine_bound = truncation_bound(&fine, f64::exp).unwrap()[0];

        assert_relative_eq!(coarse_bound, 16.0 * fine_bound, max_relative = 1e-12);
    }

    #[test]
    fn rejects_a_single_point() {
        assert_eq!(
            truncation_bound(&[1.0], f64::exp),
            Err(InvalidInputError::TooFewPoints {
                actual: 1,
                required: 2,
            })
        );
    }
}
