use std::{thread, time::Duration};

use log::debug;

use crate::context::AppContext;

/// First point of every trace.
pub const PATH_ORIGIN: (f64, f64) = (32.113582, 34.817434);

/// Longitude added per simulated fix.
pub const LON_STEP_DEG: f64 = 0.0002;

/// Accumulated sequence of (latitude, longitude) fixes shown on the map.
/// Grows for the whole run; only the plot windows are bounded.
#[derive(Clone, Debug)]
pub struct PathTrace {
    points: Vec<(f64, f64)>,
}

impl Default for PathTrace {
    fn default() -> Self {
        Self {
            points: vec![PATH_ORIGIN],
        }
    }
}

impl PathTrace {
    /// Append the next simulated fix, one longitude step east of the last
    /// known point.
    pub fn extend_track(&mut self) {
        let (lat, lon) = *self.points.last().expect("trace always has an origin");
        self.points.push((lat, lon + LON_STEP_DEG));
    }

    pub fn positions(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// GPS updater loop: extends the shared trace once per interval until
/// shutdown is requested. The caller joins the thread running this loop.
pub fn track_path(ctx: &AppContext, interval: Duration) {
    while !ctx.is_shutdown() {
        ctx.path_trace
            .lock()
            .expect("path trace lock poisoned")
            .extend_track();
        thread::sleep(interval);
    }
    debug!("GPS updater stopped");
}
