use egui::Pos2;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::LoggerError;

const CONFIG_FILE_NAME: &str = "config.json";
const APP_DIR_NAME: &str = "voltlog";

/// Producer tick: one record per second.
pub const PRODUCER_INTERVAL_MS: u64 = 1000;
/// UI refresh tick, also the map refresh cadence.
pub const REFRESH_RATE_MS: u64 = 1000;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WindowPosition {
    pub x: f32,
    pub y: f32,
}

impl Default for WindowPosition {
    fn default() -> Self {
        Self { x: 0., y: 0. }
    }
}

impl From<WindowPosition> for Pos2 {
    fn from(value: WindowPosition) -> Self {
        Pos2::new(value.x, value.y)
    }
}

impl From<Pos2> for WindowPosition {
    fn from(value: Pos2) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub producer_interval_ms: u64,
    pub refresh_rate_ms: u64,
    /// Directory for the daily log file; the working directory when unset.
    pub log_dir: Option<PathBuf>,
    pub window_position: WindowPosition,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            producer_interval_ms: PRODUCER_INTERVAL_MS,
            refresh_rate_ms: REFRESH_RATE_MS,
            log_dir: None,
            window_position: WindowPosition::default(),
        }
    }
}

impl AppConfig {
    pub fn from_local_file() -> Option<Self> {
        let config_path = dirs::config_dir()?.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let file = std::fs::File::open(config_path).expect("Could not open config file");
            Some(serde_json::from_reader(file).expect("Could not parse config file"))
        } else {
            None
        }
    }

    pub fn save(&self) -> Result<(), LoggerError> {
        let config_path = dirs::config_dir()
            .ok_or(LoggerError::NoConfigDir)?
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            std::fs::create_dir_all(config_path.parent().expect("config path has a parent"))
                .map_err(|e| LoggerError::ConfigIOError { source: e })?;
        }

        let file = std::fs::File::create(config_path)
            .map_err(|e| LoggerError::ConfigIOError { source: e })?;
        serde_json::to_writer(file, self).map_err(|e| LoggerError::ConfigSerializeError { source: e })
    }
}
