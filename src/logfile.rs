use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDate;

use crate::{
    LoggerError,
    telemetry::{COLUMN_LABELS, TelemetryRecord},
};

const DELIMITER: char = '\t';

/// Name of the daily log file, e.g. `serial_data_2026-08-30.csv`.
pub fn log_file_name(date: NaiveDate) -> String {
    format!("serial_data_{}.csv", date.format("%Y-%m-%d"))
}

/// Append-only writer for the daily log.
///
/// The file is created fresh (truncated) when the writer is built, with the
/// header row already written. Each record becomes one tab-delimited row,
/// flushed immediately so readers always see complete rows.
pub struct LogWriter {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl LogWriter {
    pub fn create(path: PathBuf) -> Result<Self, LoggerError> {
        let file = File::create(&path).map_err(|e| LoggerError::WriterError { source: e })?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", COLUMN_LABELS.join(&DELIMITER.to_string()))
            .map_err(|e| LoggerError::WriterError { source: e })?;
        writer
            .flush()
            .map_err(|e| LoggerError::WriterError { source: e })?;
        Ok(Self { path, writer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&mut self, record: &TelemetryRecord) -> Result<(), LoggerError> {
        writeln!(self.writer, "{}", record.row())
            .map_err(|e| LoggerError::WriterError { source: e })?;
        self.writer
            .flush()
            .map_err(|e| LoggerError::WriterError { source: e })
    }
}

/// Parse one column of the log as a float series, header excluded.
///
/// `column` is the absolute column index in the file, so 1 = `Ah` and
/// 2 = `Voltage (V)`; column 0 is the timestamp and does not parse.
pub fn read_column(path: &Path, column: usize) -> Result<Vec<f64>, LoggerError> {
    let file = File::open(path).map_err(|e| LoggerError::ReaderError { source: e })?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    for (row_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| LoggerError::ReaderError { source: e })?;
        if row_no == 0 {
            // header row
            continue;
        }
        let field =
            line.split(DELIMITER)
                .nth(column)
                .ok_or_else(|| LoggerError::LogParseError {
                    line: row_no + 1,
                    reason: format!("missing column {}", column),
                })?;
        let value = field
            .parse::<f64>()
            .map_err(|e| LoggerError::LogParseError {
                line: row_no + 1,
                reason: format!("could not parse '{}' as float: {}", field, e),
            })?;
        values.push(value);
    }
    Ok(values)
}

/// Column index in the log file for a column label, if the label is known.
pub fn column_index(label: &str) -> Option<usize> {
    COLUMN_LABELS.iter().position(|l| *l == label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{RollingWindow, WINDOW_SIZE};
    use tempfile::tempdir;

    fn sample_record(voltage: f64) -> TelemetryRecord {
        TelemetryRecord {
            timestamp: "10:00:00".to_string(),
            voltage,
            current: 2.,
            power: voltage * 2.,
            ..Default::default()
        }
    }

    #[test]
    fn test_log_file_name_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(log_file_name(date), "serial_data_2026-08-30.csv");
    }

    #[test]
    fn test_writer_truncates_and_writes_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");
        std::fs::write(&path, "stale contents\n").unwrap();

        let writer = LogWriter::create(path.clone()).unwrap();
        drop(writer);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, format!("{}\n", COLUMN_LABELS.join("\t")));
    }

    #[test]
    fn test_row_count_matches_appended_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let mut writer = LogWriter::create(path.clone()).unwrap();
        for i in 0..10 {
            writer.append(&sample_record(10. + i as f64)).unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 11); // header + 10 data rows
    }

    #[test]
    fn test_voltage_window_from_75_row_log() {
        // a 75-row log windows down to rows 16..=75 with x 0..59
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let mut writer = LogWriter::create(path.clone()).unwrap();
        for i in 1..=75 {
            writer.append(&sample_record(i as f64)).unwrap();
        }

        let voltage_column = column_index("Voltage (V)").unwrap();
        let values = read_column(&path, voltage_column).unwrap();
        assert_eq!(values.len(), 75);

        let window = RollingWindow::from_samples(values);
        let points = window.plot_points();
        assert_eq!(points.len(), WINDOW_SIZE);
        assert_eq!(points[0], [0., 16.]);
        assert_eq!(points[59], [59., 75.]);
    }

    #[test]
    fn test_read_column_rejects_non_numeric_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let mut writer = LogWriter::create(path.clone()).unwrap();
        writer.append(&sample_record(12.)).unwrap();

        // timestamp column is not numeric
        match read_column(&path, 0) {
            Err(LoggerError::LogParseError { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_column_rejects_short_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");
        std::fs::write(&path, "header\n1.0\t2.0\n").unwrap();

        match read_column(&path, 5) {
            Err(LoggerError::LogParseError { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_column_index_lookup() {
        assert_eq!(column_index("Timestamp"), Some(0));
        assert_eq!(column_index("Voltage (V)"), Some(2));
        assert_eq!(column_index("Flgs"), Some(13));
        assert_eq!(column_index("Bogus"), None);
    }
}
