use crate::models::{HourlyTimestamp, Reading};

/// The in-scope hourly readings of one station, in chronological order
#[derive(Debug, Clone, PartialEq)]
pub struct StationSeries {
    pub code: String,
    pub readings: Vec<Reading>,
}

impl StationSeries {
    pub fn new(code: String) -> Self {
        Self {
            code,
            readings: Vec::new(),
        }
    }

    pub fn with_readings(code: String, readings: Vec<Reading>) -> Self {
        Self { code, readings }
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn observed_count(&self) -> usize {
        self.readings.iter().filter(|r| !r.is_missing()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.len() - self.observed_count()
    }
}

/// Everything read from the hourly data files for one run.
///
/// Every series has exactly one slot per entry of `timestamps`.
#[derive(Debug, Clone, Default)]
pub struct HourlyDataset {
    pub timestamps: Vec<HourlyTimestamp>,
    pub series: Vec<StationSeries>,
    pub files_read: usize,
    pub skipped_rows: usize,
}

impl HourlyDataset {
    pub fn hours(&self) -> usize {
        self.timestamps.len()
    }

    pub fn station_count(&self) -> usize {
        self.series.len()
    }

    pub fn get(&self, code: &str) -> Option<&StationSeries> {
        self.series.iter().find(|s| s.code == code)
    }
}
