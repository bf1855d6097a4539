use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

use crate::utils::constants::REFERENCE_SITE_MARKERS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Station {
    #[validate(length(min = 1))]
    pub code: String,

    pub name: String,

    pub city: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub reference_marker: String,
}

impl Station {
    pub fn new(
        code: String,
        name: String,
        city: String,
        latitude: f64,
        longitude: f64,
        reference_marker: String,
    ) -> Self {
        Self {
            code,
            name,
            city,
            latitude,
            longitude,
            reference_marker,
        }
    }

    /// Whether the station is flagged as a reference (control) site
    pub fn is_reference_site(&self) -> bool {
        let marker = self.reference_marker.trim();
        REFERENCE_SITE_MARKERS
            .iter()
            .any(|m| m.eq_ignore_ascii_case(marker))
    }
}

/// Station metadata keyed by code, iterated in the order the stations were loaded.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    stations: Vec<Station>,
    index: HashMap<String, usize>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a station. A later entry with the same code replaces the earlier one in place.
    pub fn insert(&mut self, station: Station) {
        match self.index.get(&station.code) {
            Some(&pos) => self.stations[pos] = station,
            None => {
                self.index.insert(station.code.clone(), self.stations.len());
                self.stations.push(station);
            }
        }
    }

    pub fn get(&self, code: &str) -> Option<&Station> {
        self.index.get(code).map(|&pos| &self.stations[pos])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl FromIterator<Station> for StationRegistry {
    fn from_iter<I: IntoIterator<Item = Station>>(iter: I) -> Self {
        let mut registry = StationRegistry::new();
        for station in iter {
            registry.insert(station);
        }
        registry
    }
}
