use chrono::Local;
use egui::{Align, Button, Layout, RichText};

use crate::telemetry::{COLUMN_LABELS, PLOTTABLE_COLUMNS, producer::TIMESTAMP_FORMAT};

use super::{ActiveView, DataLoggerApp};

impl DataLoggerApp {
    pub(crate) fn header_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .min_height(40.)
            .show(ctx, |ui| {
                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                    ui.add_space(10.);
                    ui.heading("Serial Data Logger");

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.add_space(10.);
                        // trip analysis is not implemented yet
                        ui.add_enabled(false, Button::new("Trip analysis"));
                        if ui.button("GPS").clicked() {
                            self.view.open_map();
                        }
                        if ui.button("Data").clicked() {
                            self.view.show_data();
                        }
                    });
                });
            });
    }

    /// The table: one column per label with the latest value and a Plot
    /// button underneath. Plot buttons stay disabled until the first record
    /// arrives.
    pub(crate) fn data_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("data-table").show(ctx, |ui| {
            egui::Grid::new("telemetry-grid")
                .num_columns(COLUMN_LABELS.len())
                .spacing([12., 6.])
                .show(ui, |ui| {
                    for label in COLUMN_LABELS {
                        ui.label(RichText::new(label).strong());
                    }
                    ui.end_row();

                    // live clock in the timestamp slot, then the value row
                    ui.label(Local::now().format(TIMESTAMP_FORMAT).to_string());
                    for column in 0..PLOTTABLE_COLUMNS {
                        match &self.latest {
                            Some(record) => ui.label(record.display_value(column)),
                            None => ui.label(""),
                        };
                    }
                    ui.end_row();

                    ui.label("");
                    for column in 0..PLOTTABLE_COLUMNS {
                        if ui
                            .add_enabled(self.latest.is_some(), Button::new("Plot"))
                            .clicked()
                        {
                            self.view.open_plot(column);
                        }
                    }
                    ui.end_row();
                });
        });
    }

    /// Contextual close action for whatever the lower area shows.
    pub(crate) fn action_panel(&mut self, ctx: &egui::Context) {
        let label = match self.view.active() {
            ActiveView::Plot(_) => "Close Plot",
            ActiveView::Map => "Close Map",
            ActiveView::Table => return,
        };

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if ui.button(label).clicked() {
                    self.view.close();
                }
            });
        });
    }
}
