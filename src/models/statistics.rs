use serde::{Deserialize, Serialize};

/// Mean of a station's reconstructed series. `mean` is `None` when the series had no values at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationStatistic {
    pub code: String,
    pub mean: Option<f64>,
    pub samples: usize,
}

impl StationStatistic {
    pub fn is_defined(&self) -> bool {
        self.mean.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityStatistic {
    pub city: String,
    pub mean: f64,
    pub station_count: usize,
}

/// Representative location of a city: the mean position of all its stations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub city: String,
    pub value: f64,
}

impl RankedEntry {
    pub fn new(rank: usize, city: String, value: f64) -> Self {
        Self { rank, city, value }
    }
}
