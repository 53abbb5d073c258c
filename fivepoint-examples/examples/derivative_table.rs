//! Prints the reference seven-point table, then the `x, f(x), f'(x), R(x)`
//! tables for `exp` on grids of 11, 21, and 41 points over `[-1, 1]`.

use fivepoint_core::approximate_derivatives;
use fivepoint_examples::{ExpScenario, POINT_COUNTS, ScenarioError};

fn main() -> Result<(), ScenarioError> {
    let x = [2.1, 2.2, 2.3, 2.4, 2.5, 2.6, 2.7];
    let f = [
        -1.709_847,
        -1.373_823,
        -1.119_214,
        -0.916_014_3,
        -0.747_022_3,
        -0.601_596_6,
        -0.512_346_7,
    ];

    let derivatives = approximate_derivatives(&x, &f)?;

    println!("Computed derivatives for the reference table:");
    for (x, d) in x.iter().zip(&derivatives) {
        println!("x = {x}, f'(x) = {d}");
    }

    for count in POINT_COUNTS {
        let scenario = ExpScenario::new(count)?;

        println!();
        println!("{count} points, h = {}", scenario.grid.step());
        println!("x, f(x), f'(x) approx, error R(x)");
        for i in 0..count {
            println!(
                "{}, {:.5}, {:.5}, {:.8}",
                scenario.grid.points()[i],
                scenario.samples[i],
                scenario.derivatives[i],
                scenario.bounds[i],
            );
        }
    }

    Ok(())
}
