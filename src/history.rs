//! Rolling plot windows.
//!
//! The plot views never go back to the log file: the collector pushes every
//! record into one bounded window per plottable column, and a redraw only
//! reads the in-memory window.

use std::collections::VecDeque;

use crate::telemetry::{PLOTTABLE_COLUMNS, TelemetryRecord};

/// Samples kept per column, one per second of history.
pub const WINDOW_SIZE: usize = 60;

/// A bounded series of the most recent samples for one column.
#[derive(Clone, Debug, Default)]
pub struct RollingWindow {
    samples: VecDeque<f64>,
}

impl RollingWindow {
    /// Keep only the trailing `WINDOW_SIZE` samples of a series.
    pub fn from_samples(samples: impl IntoIterator<Item = f64>) -> Self {
        let mut window = Self::default();
        for sample in samples {
            window.push(sample);
        }
        window
    }

    /// Append a sample, evicting the oldest one once the window is full.
    pub fn push(&mut self, sample: f64) {
        if self.samples.len() == WINDOW_SIZE {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Chart points for the window, right-aligned so the most recent sample
    /// sits at x = `WINDOW_SIZE - 1`. A partially filled window starts at a
    /// higher x; a full window spans x 0..59.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        let offset = WINDOW_SIZE - self.samples.len();
        self.samples
            .iter()
            .enumerate()
            .map(|(i, sample)| [(offset + i) as f64, *sample])
            .collect()
    }
}

/// One rolling window per plottable column, fed a record at a time by the
/// collector.
#[derive(Clone, Debug)]
pub struct ColumnHistory {
    windows: Vec<RollingWindow>,
}

impl Default for ColumnHistory {
    fn default() -> Self {
        Self {
            windows: vec![RollingWindow::default(); PLOTTABLE_COLUMNS],
        }
    }
}

impl ColumnHistory {
    pub fn push_record(&mut self, record: &TelemetryRecord) {
        for (column, window) in self.windows.iter_mut().enumerate() {
            if let Some(value) = record.column_value(column) {
                window.push(value);
            }
        }
    }

    pub fn window(&self, column: usize) -> &RollingWindow {
        &self.windows[column]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_window_is_bounded() {
        let mut window = RollingWindow::default();
        for i in 0..200 {
            window.push(i as f64);
        }
        assert_eq!(window.len(), WINDOW_SIZE);
        // oldest surviving sample is 140, newest is 199
        assert_eq!(window.values().next(), Some(140.));
        assert_eq!(window.values().last(), Some(199.));
    }

    #[test]
    fn test_full_window_spans_zero_to_59() {
        let window = RollingWindow::from_samples((0..75).map(f64::from));
        let points = window.plot_points();
        assert_eq!(points.len(), WINDOW_SIZE);
        assert_eq!(points[0], [0., 15.]);
        assert_eq!(points[59], [59., 74.]);
    }

    #[test]
    fn test_partial_window_is_right_aligned() {
        let window = RollingWindow::from_samples([1., 2., 3.]);
        let points = window.plot_points();
        assert_eq!(points, vec![[57., 1.], [58., 2.], [59., 3.]]);
    }

    #[test]
    fn test_empty_window_has_no_points() {
        assert!(RollingWindow::default().plot_points().is_empty());
    }

    #[test]
    fn test_history_tracks_every_plottable_column() {
        let mut history = ColumnHistory::default();
        let record = TelemetryRecord {
            voltage: 12.5,
            rpm: 3000.,
            flags: 9,
            ..Default::default()
        };
        history.push_record(&record);
        assert_eq!(history.window(1).values().next(), Some(12.5));
        assert_eq!(history.window(7).values().next(), Some(3000.));
        assert_eq!(history.window(12).values().next(), Some(9.));
    }

    proptest! {
        #[test]
        fn prop_last_point_is_always_at_59(samples in prop::collection::vec(-1e6..1e6f64, 1..200)) {
            let window = RollingWindow::from_samples(samples.iter().copied());
            let points = window.plot_points();
            prop_assert!(points.len() <= WINDOW_SIZE);
            prop_assert_eq!(points.last().unwrap()[0], (WINDOW_SIZE - 1) as f64);
            prop_assert_eq!(points.last().unwrap()[1], *samples.last().unwrap());
        }
    }
}
