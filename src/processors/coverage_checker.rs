use crate::models::{HourlyDataset, StationRegistry};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct CoverageReport {
    pub hours: usize,
    pub files_read: usize,
    pub skipped_rows: usize,
    pub station_coverage: Vec<StationCoverage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationCoverage {
    pub code: String,
    pub city: String,
    pub observed: usize,
    pub missing: usize,
}

impl StationCoverage {
    pub fn total(&self) -> usize {
        self.observed + self.missing
    }

    /// Share of slots with a reading, 0.0 for an empty series
    pub fn ratio(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.observed as f64 / self.total() as f64
        }
    }
}

impl CoverageReport {
    pub fn total_slots(&self) -> usize {
        self.station_coverage.iter().map(StationCoverage::total).sum()
    }

    pub fn missing_slots(&self) -> usize {
        self.station_coverage.iter().map(|s| s.missing).sum()
    }

    /// Stations with no reading at all, whose statistic will be undefined
    pub fn empty_stations(&self) -> impl Iterator<Item = &StationCoverage> {
        self.station_coverage.iter().filter(|s| s.observed == 0)
    }
}

pub struct CoverageChecker {
    sparse_threshold: f64,
}

impl CoverageChecker {
    pub fn new() -> Self {
        Self {
            sparse_threshold: 0.5, // under half the hours observed
        }
    }

    pub fn with_sparse_threshold(sparse_threshold: f64) -> Self {
        Self { sparse_threshold }
    }

    /// Measure how complete each station's raw series is before gap filling
    pub fn check_coverage(&self, dataset: &HourlyDataset, stations: &StationRegistry) -> CoverageReport {
        let station_coverage: Vec<StationCoverage> = dataset
            .series
            .iter()
            .map(|series| StationCoverage {
                code: series.code.clone(),
                city: stations
                    .get(&series.code)
                    .map(|s| s.city.clone())
                    .unwrap_or_default(),
                observed: series.observed_count(),
                missing: series.missing_count(),
            })
            .collect();

        let report = CoverageReport {
            hours: dataset.hours(),
            files_read: dataset.files_read,
            skipped_rows: dataset.skipped_rows,
            station_coverage,
        };

        let empty = report.empty_stations().count();
        if empty > 0 {
            warn!(stations = empty, "Stations without any in-scope reading");
        }

        report
    }

    /// Stations observed in fewer than the threshold share of hours, sparsest first
    pub fn sparse_stations<'a>(&self, report: &'a CoverageReport) -> Vec<&'a StationCoverage> {
        let mut sparse: Vec<&StationCoverage> = report
            .station_coverage
            .iter()
            .filter(|s| s.ratio() < self.sparse_threshold)
            .collect();
        sparse.sort_by(|a, b| a.ratio().total_cmp(&b.ratio()));
        sparse
    }

    /// Generate a summary report
    pub fn generate_summary(&self, report: &CoverageReport) -> String {
        let mut summary = String::new();

        summary.push_str("=== Coverage Report ===\n");
        summary.push_str(&format!("Data Files: {}\n", report.files_read));
        summary.push_str(&format!("In-scope Hours: {}\n", report.hours));
        summary.push_str(&format!("Stations: {}\n", report.station_coverage.len()));
        summary.push_str(&format!("Skipped Rows: {}\n", report.skipped_rows));

        let total = report.total_slots();
        let missing = report.missing_slots();
        let missing_pct = if total == 0 {
            0.0
        } else {
            100.0 * missing as f64 / total as f64
        };
        summary.push_str(&format!(
            "Missing Readings: {} of {} ({:.1}%)\n",
            missing, total, missing_pct
        ));
        summary.push_str(&format!(
            "Stations Without Data: {}\n",
            report.empty_stations().count()
        ));

        let sparse = self.sparse_stations(report);
        if !sparse.is_empty() {
            summary.push_str(&format!(
                "\nSparse Stations (< {:.0}% observed): {}\n",
                self.sparse_threshold * 100.0,
                sparse.len()
            ));
            for (i, station) in sparse.iter().take(10).enumerate() {
                summary.push_str(&format!(
                    "  {}. {} ({}): {}/{} hours ({:.1}%)\n",
                    i + 1,
                    station.code,
                    station.city,
                    station.observed,
                    station.total(),
                    100.0 * station.ratio()
                ));
            }
        }

        summary
    }
}

impl Default for CoverageChecker {
    fn default() -> Self {
        Self::new()
    }
}
