use egui::{Color32, Vec2b};
use egui_plot::{Corner, Legend, Line, PlotPoints, uniform_grid_spacer};

use crate::{history::WINDOW_SIZE, telemetry::COLUMN_LABELS};

use super::DataLoggerApp;

const LINE_COLOR: Color32 = Color32::from_rgb(2, 21, 38);

impl DataLoggerApp {
    /// Rolling chart for one column: fixed x bounds [0, 60] with grid lines
    /// every 10 seconds, y following the data.
    pub(crate) fn plot_view(&mut self, ctx: &egui::Context, column: usize) {
        let points = self
            .shared
            .history
            .lock()
            .expect("column history lock poisoned")
            .window(column)
            .plot_points();
        let label = COLUMN_LABELS[column + 1];

        egui::CentralPanel::default().show(ctx, |ui| {
            let plot = egui_plot::Plot::new("column-chart")
                .allow_drag(false)
                .allow_scroll(false)
                .allow_zoom(false)
                .include_x(0.)
                .include_x(WINDOW_SIZE as f64)
                .auto_bounds(Vec2b::new(false, true))
                .x_grid_spacer(uniform_grid_spacer(|_| [60., 30., 10.]))
                .x_axis_label("Time (seconds)")
                .y_axis_label(label)
                .legend(Legend::default().position(Corner::LeftTop));

            plot.show(ui, |plot_ui| {
                plot_ui.line(Line::new(label, PlotPoints::new(points)).color(LINE_COLOR));
            });
        });
    }
}
