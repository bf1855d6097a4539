use crate::error::{ProcessingError, Result};
use crate::models::{Station, StationRegistry};
use crate::utils::constants::{
    STATION_CITY_HEADER, STATION_CODE_HEADER, STATION_LAT_HEADER, STATION_LON_HEADER,
    STATION_NAME_HEADER, STATION_REFERENCE_HEADER, UNKNOWN_CITY,
};
use crate::utils::coordinates::parse_coordinate_or_default;
use crate::utils::encoding::read_text_file;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;
use tracing::{debug, warn};
use validator::Validate;

/// Positions of the station list columns, resolved from the header row
#[derive(Debug, Clone, Copy)]
struct StationColumns {
    code: usize,
    name: Option<usize>,
    city: Option<usize>,
    longitude: Option<usize>,
    latitude: Option<usize>,
    reference: Option<usize>,
}

impl StationColumns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        let code = find(STATION_CODE_HEADER).ok_or_else(|| {
            ProcessingError::MissingData(format!(
                "Station list has no '{}' column",
                STATION_CODE_HEADER
            ))
        })?;

        Ok(Self {
            code,
            name: find(STATION_NAME_HEADER),
            city: find(STATION_CITY_HEADER),
            longitude: find(STATION_LON_HEADER),
            latitude: find(STATION_LAT_HEADER),
            reference: find(STATION_REFERENCE_HEADER),
        })
    }
}

pub struct StationReader;

impl StationReader {
    pub fn new() -> Self {
        Self
    }

    /// Read station metadata from the station list CSV
    pub fn read_stations(&self, path: &Path) -> Result<StationRegistry> {
        let text = read_text_file(path)?;
        let registry = self.parse_stations(&text)?;
        debug!(path = %path.display(), stations = registry.len(), "Loaded station list");
        Ok(registry)
    }

    /// Parse station metadata from CSV text with a header row
    pub fn parse_stations(&self, text: &str) -> Result<StationRegistry> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let columns = StationColumns::from_headers(reader.headers()?)?;
        let mut registry = StationRegistry::new();

        for record in reader.records() {
            let record = record?;
            if let Some(station) = self.parse_station_record(&record, &columns) {
                registry.insert(station);
            }
        }

        Ok(registry)
    }

    fn parse_station_record(&self, record: &StringRecord, columns: &StationColumns) -> Option<Station> {
        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");

        let code = field(Some(columns.code));
        if code.is_empty() {
            return None;
        }

        let city = match field(columns.city) {
            "" => UNKNOWN_CITY,
            city => city,
        };

        let station = Station::new(
            code.to_string(),
            field(columns.name).to_string(),
            city.to_string(),
            parse_coordinate_or_default(field(columns.latitude)),
            parse_coordinate_or_default(field(columns.longitude)),
            field(columns.reference).to_string(),
        );

        if let Err(e) = station.validate() {
            warn!(station = %station.code, error = %e, "Station metadata out of range, kept as is");
        }

        Some(station)
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}
