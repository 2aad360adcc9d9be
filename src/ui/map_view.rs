use egui::Color32;
use egui_plot::{Line, PlotPoints};

use super::DataLoggerApp;

const TRACK_COLOR: Color32 = Color32::from_rgb(0, 128, 0);
const TRACK_WIDTH: f32 = 4.;

impl DataLoggerApp {
    /// Draws the accumulated GPS track, longitude on x and latitude on y
    /// with a 1:1 aspect so the path keeps its shape.
    pub(crate) fn map_view(&mut self, ctx: &egui::Context) {
        let points: Vec<[f64; 2]> = self
            .shared
            .path_trace
            .lock()
            .expect("path trace lock poisoned")
            .positions()
            .iter()
            .map(|(lat, lon)| [*lon, *lat])
            .collect();

        egui::CentralPanel::default().show(ctx, |ui| {
            let plot = egui_plot::Plot::new("gps-track")
                .data_aspect(1.0)
                .x_axis_label("Longitude")
                .y_axis_label("Latitude");

            plot.show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("Track", PlotPoints::new(points))
                        .color(TRACK_COLOR)
                        .width(TRACK_WIDTH),
                );
            });
        });
    }
}
