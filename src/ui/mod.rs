mod map_view;
mod plot_view;
mod table_view;

use std::{sync::mpsc::Receiver, time::Duration};

use egui::Visuals;
use log::error;

use crate::{config::AppConfig, context::AppContext, telemetry::TelemetryRecord};

/// What the area under the data table currently shows. A plot and the map
/// can never be visible together, and opening a new chart replaces the
/// previous one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    /// Just the data table, nothing underneath
    #[default]
    Table,
    /// Rolling chart for one plottable column
    Plot(usize),
    /// GPS track of the run
    Map,
}

/// Lifecycle of the plot/map area, driven by the view buttons.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewState {
    active: ActiveView,
}

impl ViewState {
    pub fn active(&self) -> ActiveView {
        self.active
    }

    /// Open a chart for a plottable column, tearing down whatever chart or
    /// map was showing.
    pub fn open_plot(&mut self, column: usize) {
        self.active = ActiveView::Plot(column);
    }

    /// Show the GPS track, hiding any active chart.
    pub fn open_map(&mut self) {
        self.active = ActiveView::Map;
    }

    /// Back to the data view; leaves an active chart alone but closes the
    /// map.
    pub fn show_data(&mut self) {
        if self.active == ActiveView::Map {
            self.active = ActiveView::Table;
        }
    }

    /// The contextual close action.
    pub fn close(&mut self) {
        self.active = ActiveView::Table;
    }

    pub fn plot_column(&self) -> Option<usize> {
        match self.active {
            ActiveView::Plot(column) => Some(column),
            _ => None,
        }
    }

    pub fn map_visible(&self) -> bool {
        self.active == ActiveView::Map
    }
}

/// `DataLoggerApp` renders the live telemetry table with the optional
/// rolling chart or GPS track underneath.
///
/// Each refresh tick drains at most one record from the collector channel
/// into the value row; an empty channel leaves the previous values on
/// screen. Chart data comes from the shared in-memory windows, never from
/// the log file.
pub struct DataLoggerApp {
    record_receiver: Receiver<TelemetryRecord>,
    latest: Option<TelemetryRecord>,
    view: ViewState,
    app_config: AppConfig,
    shared: AppContext,
}

impl DataLoggerApp {
    pub fn new(
        record_receiver: Receiver<TelemetryRecord>,
        app_config: AppConfig,
        shared: AppContext,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        cc.egui_ctx.set_visuals(Visuals::light());

        Self {
            record_receiver,
            latest: None,
            view: ViewState::default(),
            app_config,
            shared,
        }
    }
}

impl eframe::App for DataLoggerApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.shared.request_shutdown();
        if let Err(e) = self.app_config.save() {
            error!("Error while saving config file: {}", e);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // at most one queued record per tick; an empty queue is a no-op
        if let Ok(record) = self.record_receiver.try_recv() {
            self.latest = Some(record);
        }

        if let Some(outer_rect) = ctx.input(|is| is.viewport().outer_rect) {
            self.app_config.window_position = outer_rect.min.into();
        }

        self.header_panel(ctx);
        self.data_panel(ctx);
        self.action_panel(ctx);

        match self.view.active() {
            ActiveView::Plot(column) => self.plot_view(ctx, column),
            ActiveView::Map => self.map_view(ctx),
            ActiveView::Table => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.weak("Select a column to plot or open the GPS view");
                    });
                });
            }
        }

        ctx.request_repaint_after(Duration::from_millis(self.app_config.refresh_rate_ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_a_second_plot_replaces_the_first() {
        let mut view = ViewState::default();
        view.open_plot(1);
        view.open_plot(4);
        assert_eq!(view.plot_column(), Some(4));
        assert_eq!(view.active(), ActiveView::Plot(4));
    }

    #[test]
    fn test_map_and_plot_are_mutually_exclusive() {
        let mut view = ViewState::default();
        view.open_plot(2);
        view.open_map();
        assert!(view.map_visible());
        assert_eq!(view.plot_column(), None);

        view.open_plot(2);
        assert!(!view.map_visible());
        assert_eq!(view.plot_column(), Some(2));
    }

    #[test]
    fn test_data_button_closes_the_map_but_keeps_a_chart() {
        let mut view = ViewState::default();
        view.open_map();
        view.show_data();
        assert_eq!(view.active(), ActiveView::Table);

        view.open_plot(3);
        view.show_data();
        assert_eq!(view.active(), ActiveView::Plot(3));
    }

    #[test]
    fn test_close_returns_to_the_bare_table() {
        let mut view = ViewState::default();
        view.open_plot(0);
        view.close();
        assert_eq!(view.active(), ActiveView::Table);

        view.open_map();
        view.close();
        assert_eq!(view.active(), ActiveView::Table);
    }
}
