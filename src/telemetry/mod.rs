pub mod collector;
pub mod producer;

pub use collector::collect_telemetry;
use serde::{Deserialize, Serialize};

/// Column labels, in file and display order. The first column is the
/// timestamp; every other column holds a numeric reading and can be plotted.
pub const COLUMN_LABELS: [&str; 14] = [
    "Timestamp",
    "Ah",
    "Voltage (V)",
    "Current (A)",
    "Power (Watt)",
    "Speed (m/s)",
    "Distance (m)",
    "Degree (°)",
    "RPM (Rounds/Minute)",
    "ThO",
    "ThI",
    "AuxA",
    "AuxD",
    "Flgs",
];

/// Number of plottable columns (everything except the timestamp).
pub const PLOTTABLE_COLUMNS: usize = COLUMN_LABELS.len() - 1;

/// Round to two decimal places, matching the precision written to the log.
pub fn round2(value: f64) -> f64 {
    (value * 100.).round() / 100.
}

/// One simulated serial telemetry sample.
///
/// Records are created once per tick by the producer, serialized to the log
/// file and handed to the UI channel. `power` is not an independent reading:
/// it is derived as `current * voltage` at generation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    /// Wall-clock time of the sample, formatted `%H:%M:%S`
    pub timestamp: String,
    /// Consumed charge (Ah)
    pub amp_hours: f64,
    /// Battery voltage (V)
    pub voltage: f64,
    /// Battery current (A)
    pub current: f64,
    /// Derived power (W), always `round(current * voltage, 2)`
    pub power: f64,
    /// Ground speed (m/s)
    pub speed: f64,
    /// Distance traveled (m)
    pub distance: f64,
    /// Controller temperature (°)
    pub temperature: f64,
    /// Motor speed (rounds/minute)
    pub rpm: f64,
    /// Throttle output, 0..1
    pub throttle_out: f64,
    /// Throttle input, 0..1
    pub throttle_in: f64,
    /// Auxiliary analog channel, 0..1
    pub aux_analog: f64,
    /// Auxiliary digital channel, 0..1
    pub aux_digital: f64,
    /// Status flags byte
    pub flags: u8,
}

impl TelemetryRecord {
    /// Numeric value of a plottable column, or `None` for an index past the
    /// last column. `column` is zero-based over the plottable columns, so
    /// 0 = `Ah` and 12 = `Flgs`.
    pub fn column_value(&self, column: usize) -> Option<f64> {
        match column {
            0 => Some(self.amp_hours),
            1 => Some(self.voltage),
            2 => Some(self.current),
            3 => Some(self.power),
            4 => Some(self.speed),
            5 => Some(self.distance),
            6 => Some(self.temperature),
            7 => Some(self.rpm),
            8 => Some(self.throttle_out),
            9 => Some(self.throttle_in),
            10 => Some(self.aux_analog),
            11 => Some(self.aux_digital),
            12 => Some(self.flags as f64),
            _ => None,
        }
    }

    /// Display string for a plottable column, as shown in the value row of
    /// the data table and written to the log file. Empty for an index past
    /// the last column.
    pub fn display_value(&self, column: usize) -> String {
        match column {
            12 => format!("{}", self.flags),
            _ => self
                .column_value(column)
                .map(|value| format!("{:.2}", value))
                .unwrap_or_default(),
        }
    }

    /// The full tab-delimited log row, timestamp first.
    pub fn row(&self) -> String {
        let mut fields = Vec::with_capacity(COLUMN_LABELS.len());
        fields.push(self.timestamp.clone());
        for column in 0..PLOTTABLE_COLUMNS {
            fields.push(self.display_value(column));
        }
        fields.join("\t")
    }
}

impl Default for TelemetryRecord {
    fn default() -> Self {
        Self {
            timestamp: "00:00:00".to_string(),
            amp_hours: 0.,
            voltage: 0.,
            current: 0.,
            power: 0.,
            speed: 0.,
            distance: 0.,
            temperature: 0.,
            rpm: 0.,
            throttle_out: 0.,
            throttle_in: 0.,
            aux_analog: 0.,
            aux_digital: 0.,
            flags: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_has_one_field_per_column() {
        let record = TelemetryRecord::default();
        let row = record.row();
        let fields: Vec<&str> = row.split('\t').collect();
        assert_eq!(fields.len(), COLUMN_LABELS.len());
    }

    #[test]
    fn test_row_starts_with_timestamp() {
        let record = TelemetryRecord {
            timestamp: "12:34:56".to_string(),
            ..Default::default()
        };
        assert!(record.row().starts_with("12:34:56\t"));
    }

    #[test]
    fn test_column_value_matches_display_value() {
        let record = TelemetryRecord {
            voltage: 13.37,
            flags: 200,
            ..Default::default()
        };
        assert_eq!(record.column_value(1), Some(13.37));
        assert_eq!(record.display_value(1), "13.37");
        assert_eq!(record.column_value(12), Some(200.));
        assert_eq!(record.display_value(12), "200");
    }

    #[test]
    fn test_out_of_range_column_yields_nothing() {
        let record = TelemetryRecord::default();
        assert_eq!(record.column_value(PLOTTABLE_COLUMNS), None);
        assert_eq!(record.display_value(PLOTTABLE_COLUMNS), "");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.2345), 1.23);
        assert_eq!(round2(9.876), 9.88);
        assert_eq!(round2(10.0), 10.0);
    }
}
