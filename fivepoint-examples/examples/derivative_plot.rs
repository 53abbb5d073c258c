//! Plots the derivative approximations of `exp` for each grid resolution.

use fivepoint_examples::{ExpScenario, POINT_COUNTS};
use fivepoint_plot::PlotApp;

fn main() {
    let mut app = PlotApp::new().with_axis_labels("x", "f'(x) approximation");

    for count in POINT_COUNTS {
        let scenario = ExpScenario::new(count).expect("grids of 11+ points are valid");
        let name = format!("{count} points");

        app = app.add_xy(&name, scenario.grid.points(), &scenario.derivatives);
    }

    app.run("Approximations of f'(x)").unwrap();
}
