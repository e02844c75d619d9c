//! Interactive rendering of a [`Figure`] via egui.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::Figure;

/// Configuration for rendering a [`Figure`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// figure.show(ShowConfig::new().markers().legend("Fn"))?;
/// ```
pub struct ShowConfig {
    legend: Option<String>,
    markers: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: a line with no markers and no legend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            legend: None,
            markers: false,
        }
    }

    /// Shows a legend naming the plotted function.
    #[must_use]
    pub fn legend(mut self, name: impl Into<String>) -> Self {
        self.legend = Some(name.into());
        self
    }

    /// Draws a marker at every sampled point.
    #[must_use]
    pub fn markers(mut self) -> Self {
        self.markers = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure {
    /// Opens a blocking egui window displaying the figure.
    ///
    /// Points with a non-finite coordinate are skipped. Blocks until the
    /// window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let title = self.title().to_owned();
        let points = self.finite_points().collect();
        let legend = config.legend.is_some();
        let name = config.legend.unwrap_or_default();
        let markers = config.markers;

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| {
                Ok(Box::new(FigureApp {
                    points,
                    name,
                    legend,
                    markers,
                }))
            }),
        )
    }
}

/// The egui [`eframe::App`] that renders a figure.
struct FigureApp {
    points: Vec<[f64; 2]>,
    name: String,
    legend: bool,
    markers: bool,
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("fnplot-figure");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                let line: PlotPoints = self.points.iter().copied().collect();
                plot_ui.line(Line::new(line).name(&self.name));
                if self.markers {
                    let markers: PlotPoints = self.points.iter().copied().collect();
                    plot_ui.points(Points::new(markers).radius(2.0).name(&self.name));
                }
            });
        });
    }
}
