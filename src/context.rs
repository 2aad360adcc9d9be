use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use crate::{gps::PathTrace, history::ColumnHistory};

/// Shared state handed to the producer loop, the GPS updater, and the UI
/// controller. Everything that used to be ambient is carried explicitly: the
/// shutdown flag both background loops poll, the per-column plot windows the
/// collector fills, and the lock-guarded path trace.
#[derive(Clone, Default)]
pub struct AppContext {
    pub shutdown: Arc<AtomicBool>,
    pub history: Arc<Mutex<ColumnHistory>>,
    pub path_trace: Arc<Mutex<PathTrace>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}
