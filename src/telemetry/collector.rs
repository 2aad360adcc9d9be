use std::{sync::mpsc::Sender, thread, time::Duration};

use log::debug;

use crate::{LoggerError, context::AppContext, logfile::LogWriter};

use super::{TelemetryRecord, producer::TelemetryProducer};

/// Producer loop: one record per interval until shutdown is requested.
///
/// Each iteration draws a record from the producer, appends it to the log
/// file, pushes its columns into the shared plot windows, and sends it to
/// the UI channel. The UI hanging up while shutdown is pending is a normal
/// teardown; a send failure at any other time is an error.
pub fn collect_telemetry(
    mut producer: impl TelemetryProducer,
    mut writer: LogWriter,
    record_sender: Sender<TelemetryRecord>,
    ctx: &AppContext,
    interval: Duration,
) -> Result<(), LoggerError> {
    producer.start()?;

    while !ctx.is_shutdown() {
        let record = producer.record()?;
        writer.append(&record)?;

        ctx.history
            .lock()
            .expect("column history lock poisoned")
            .push_record(&record);

        if let Err(e) = record_sender.send(record) {
            if ctx.is_shutdown() {
                break;
            }
            return Err(e.into());
        }

        thread::sleep(interval);
    }

    debug!("telemetry collector stopped");
    Ok(())
}
