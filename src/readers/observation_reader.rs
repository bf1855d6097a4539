use crate::error::Result;
use crate::models::{HourlyDataset, HourlyTimestamp, Reading, StationRegistry, StationSeries};
use crate::processors::SeasonFilter;
use crate::utils::constants::{DATE_COLUMN, FIRST_STATION_COLUMN, HOUR_COLUMN, TYPE_COLUMN};
use crate::utils::encoding::read_text_file;
use crate::utils::progress::ProgressReporter;
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reads hourly station data files into per-station series.
///
/// Each file starts with a header row `date,hour,type,<station code>...`
/// followed by one row per hour and measured quantity.
pub struct ObservationReader {
    pollutant: String,
    season: SeasonFilter,
}

impl ObservationReader {
    pub fn new(pollutant: &str, season: SeasonFilter) -> Self {
        Self {
            pollutant: pollutant.to_string(),
            season,
        }
    }

    /// Station codes listed in the header of a data file, in column order
    pub fn read_station_codes(&self, path: &Path) -> Result<Vec<String>> {
        let text = read_text_file(path)?;
        let mut reader = Self::csv_reader(&text);

        let mut header = StringRecord::new();
        if !reader.read_record(&mut header)? {
            return Ok(Vec::new());
        }

        Ok(header
            .iter()
            .skip(FIRST_STATION_COLUMN)
            .map(|code| code.trim().to_string())
            .collect())
    }

    /// Keep the header codes that have metadata, dropping repeats and, if asked, reference sites
    pub fn select_stations(
        &self,
        header_codes: &[String],
        stations: &StationRegistry,
        exclude_reference_sites: bool,
    ) -> Vec<String> {
        let mut selected: Vec<String> = Vec::new();

        for code in header_codes {
            let Some(station) = stations.get(code) else {
                continue;
            };
            if exclude_reference_sites && station.is_reference_site() {
                debug!(station = %code, "Reference site excluded");
                continue;
            }
            if !selected.contains(code) {
                selected.push(code.clone());
            }
        }

        selected
    }

    /// Build the in-scope series of `station_codes` from every data file
    pub fn read_dataset(
        &self,
        files: &[PathBuf],
        station_codes: &[String],
        progress: &ProgressReporter,
    ) -> Result<HourlyDataset> {
        let mut dataset = HourlyDataset {
            series: station_codes
                .iter()
                .map(|code| StationSeries::new(code.clone()))
                .collect(),
            ..Default::default()
        };

        for path in files {
            let text = read_text_file(path)?;
            let before = dataset.hours();
            self.append_rows(&text, &mut dataset)?;
            dataset.files_read += 1;

            debug!(
                file = %path.display(),
                hours = dataset.hours() - before,
                "Read data file"
            );
            progress.increment(1);
        }

        Ok(dataset)
    }

    /// Append the in-scope rows of one data file to `dataset`
    pub fn append_rows(&self, text: &str, dataset: &mut HourlyDataset) -> Result<()> {
        let mut reader = Self::csv_reader(text);

        let mut header = StringRecord::new();
        if !reader.read_record(&mut header)? {
            warn!("Data file is empty, skipped");
            return Ok(());
        }
        let columns = Self::station_columns(&header, &dataset.series);

        let mut record = StringRecord::new();
        while reader.read_record(&mut record)? {
            if record.len() <= TYPE_COLUMN || record[TYPE_COLUMN].trim() != self.pollutant {
                continue;
            }

            let timestamp = match HourlyTimestamp::parse(&record[DATE_COLUMN], &record[HOUR_COLUMN]) {
                Ok(ts) => ts,
                Err(e) => {
                    warn!(
                        date = &record[DATE_COLUMN],
                        hour = &record[HOUR_COLUMN],
                        error = %e,
                        "Skipping row with malformed timestamp"
                    );
                    dataset.skipped_rows += 1;
                    continue;
                }
            };

            if !self.season.contains(&timestamp) {
                continue;
            }

            dataset.timestamps.push(timestamp);
            for (series, column) in dataset.series.iter_mut().zip(&columns) {
                let reading = column
                    .and_then(|idx| record.get(idx))
                    .map_or(Reading::Missing, Reading::parse);
                series.readings.push(reading);
            }
        }

        Ok(())
    }

    /// Column index of each tracked station in this file's header; the first column wins on repeats
    fn station_columns(header: &StringRecord, series: &[StationSeries]) -> Vec<Option<usize>> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for (idx, code) in header.iter().enumerate().skip(FIRST_STATION_COLUMN) {
            positions.entry(code.trim()).or_insert(idx);
        }

        series
            .iter()
            .map(|s| positions.get(s.code.as_str()).copied())
            .collect()
    }

    fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
        ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes())
    }
}
