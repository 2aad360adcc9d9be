// Error types for voltlog

use crate::telemetry::TelemetryRecord;
use snafu::Snafu;
use std::{io, sync::mpsc::SendError};

#[derive(Debug, Snafu)]
pub enum LoggerError {
    // Errors while generating and broadcasting telemetry records
    #[snafu(display("Telemetry producer error: {description}"))]
    ProducerError { description: String },
    #[snafu(display("Error broadcasting telemetry record"))]
    BroadcastError {
        source: Box<SendError<TelemetryRecord>>,
    },

    // Errors for the daily log file
    #[snafu(display("Error writing log file"))]
    WriterError { source: io::Error },
    #[snafu(display("Error reading log file"))]
    ReaderError { source: io::Error },
    #[snafu(display("Malformed log row at line {line}: {reason}"))]
    LogParseError { line: usize, reason: String },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },
}

impl From<SendError<TelemetryRecord>> for LoggerError {
    fn from(value: SendError<TelemetryRecord>) -> Self {
        LoggerError::BroadcastError {
            source: Box::new(value),
        }
    }
}
