use chrono::Local;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::LoggerError;

use super::{TelemetryRecord, round2};

/// Format of the timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// A source of telemetry records.
///
/// There is no real serial interface: the shipped implementation draws
/// synthetic readings, and tests replay scripted records through the same
/// seam.
pub trait TelemetryProducer {
    /// Initialize the producer. Synthetic producers have nothing to connect
    /// to, but the seam keeps room for a real serial reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the data source cannot be opened.
    fn start(&mut self) -> Result<(), LoggerError>;

    /// Produce the next telemetry record.
    ///
    /// # Errors
    ///
    /// Returns an error if the producer is not started or the data source is
    /// exhausted (for scripted producers).
    fn record(&mut self) -> Result<TelemetryRecord, LoggerError>;
}

/// Draws every sensor reading uniformly from its fixed range and derives
/// power from the current and voltage draws.
pub struct SyntheticTelemetryProducer {
    rng: StdRng,
}

impl Default for SyntheticTelemetryProducer {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl SyntheticTelemetryProducer {
    /// Deterministic producer for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TelemetryProducer for SyntheticTelemetryProducer {
    fn start(&mut self) -> Result<(), LoggerError> {
        Ok(())
    }

    fn record(&mut self) -> Result<TelemetryRecord, LoggerError> {
        let voltage = round2(self.rng.gen_range(10.0..20.0));
        let current = round2(self.rng.gen_range(0.5..10.0));

        Ok(TelemetryRecord {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            amp_hours: round2(self.rng.gen_range(0.1..5.0)),
            voltage,
            current,
            power: round2(current * voltage),
            speed: round2(self.rng.gen_range(0.0..100.0)),
            distance: round2(self.rng.gen_range(0.0..1000.0)),
            temperature: round2(self.rng.gen_range(25.0..32.0)),
            rpm: round2(self.rng.gen_range(0.0..5000.0)),
            throttle_out: round2(self.rng.gen_range(0.0..1.0)),
            throttle_in: round2(self.rng.gen_range(0.0..1.0)),
            aux_analog: round2(self.rng.gen_range(0.0..1.0)),
            aux_digital: round2(self.rng.gen_range(0.0..1.0)),
            flags: self.rng.gen_range(0..=255),
        })
    }
}

/// Replays a fixed sequence of records. Used by tests that need a known
/// feed through the collector without touching the RNG.
pub struct ScriptedTelemetryProducer {
    cur_tick: usize,
    records: Vec<TelemetryRecord>,
}

impl ScriptedTelemetryProducer {
    pub fn from_records(records: Vec<TelemetryRecord>) -> Self {
        Self {
            cur_tick: 0,
            records,
        }
    }
}

impl TelemetryProducer for ScriptedTelemetryProducer {
    fn start(&mut self) -> Result<(), LoggerError> {
        Ok(())
    }

    fn record(&mut self) -> Result<TelemetryRecord, LoggerError> {
        let record = self
            .records
            .get(self.cur_tick)
            .cloned()
            .ok_or_else(|| LoggerError::ProducerError {
                description: format!(
                    "scripted producer exhausted after {} records",
                    self.cur_tick
                ),
            })?;
        self.cur_tick += 1;
        Ok(record)
    }
}
