use eframe::egui;
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoint, Points, VLine};

/// A runnable egui application for plotting curves over a shared x axis.
///
/// Each series is drawn as a line with point markers, matching the tabular
/// data it visualizes. Dashed reference lines mark the two axes.
#[derive(Default)]
pub struct PlotApp {
    x_label: String,
    y_label: String,
    series: Vec<Series>,
}

struct Series {
    name: String,
    points: Vec<PlotPoint>,
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the axis labels shown along the plot edges.
    #[must_use]
    pub fn with_axis_labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = x_label.to_string();
        self.y_label = y_label.to_string();
        self
    }

    /// Adds a named series of `[x, y]` points.
    #[must_use]
    pub fn add_series(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: points.iter().copied().map(Into::into).collect(),
        });

        self
    }

    /// Adds a named series by zipping abscissas with values.
    ///
    /// Extra elements in the longer slice are ignored.
    #[must_use]
    pub fn add_xy(self, name: &str, x: &[f64], y: &[f64]) -> Self {
        let points: Vec<[f64; 2]> = x.iter().zip(y).map(|(&x, &y)| [x, y]).collect();
        self.add_series(name, &points)
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, title: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            title,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("plot-id")
                .legend(Legend::default())
                .x_axis_label(self.x_label.clone())
                .y_axis_label(self.y_label.clone())
                .show(ui, |plot_ui| {
                    plot_ui.hline(HLine::new(0.0).style(LineStyle::dashed_loose()));
                    plot_ui.vline(VLine::new(0.0).style(LineStyle::dashed_loose()));

                    for series in &self.series {
                        let points = series.points.as_slice();
                        let name = &series.name;

                        plot_ui.line(Line::new(points).name(name));
                        plot_ui.points(Points::new(points).name(name).radius(3.0));
                    }
                });
        });
    }
}
