// Library interface for voltlog
// This allows integration tests to access internal modules

pub mod config;
pub mod context;
pub mod errors;
pub mod gps;
pub mod history;
pub mod logfile;
pub mod telemetry;
pub mod ui;

// Re-export commonly used types
pub use config::AppConfig;
pub use context::AppContext;
pub use errors::LoggerError;
pub use gps::PathTrace;
pub use history::{ColumnHistory, RollingWindow};
pub use telemetry::{TelemetryRecord, collect_telemetry};
