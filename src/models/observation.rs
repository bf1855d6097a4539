use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, Result};

/// A single hourly pollutant reading for one station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Reading {
    Value(f64),
    Missing,
}

impl Reading {
    /// Parse a raw CSV cell. Empty, unparseable and non-finite cells become `Missing`.
    pub fn parse(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return Reading::Missing;
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Reading::Value(value),
            _ => Reading::Missing,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Reading::Value(v) => Some(*v),
            Reading::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Reading::Missing)
    }
}

impl From<Option<f64>> for Reading {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Reading::Missing, Reading::Value)
    }
}

/// Timestamp of an hourly observation. Always aligned to the start of an hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HourlyTimestamp(NaiveDateTime);

impl HourlyTimestamp {
    pub fn new(date: NaiveDate, hour: u32) -> Result<Self> {
        let time = NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(|| {
            ProcessingError::InvalidTimestamp(format!("Hour must be between 0 and 23, got: {}", hour))
        })?;
        Ok(Self(date.and_time(time)))
    }

    /// Build a timestamp from the `YYYYMMDD` date and hour columns of a data row
    pub fn parse(date_str: &str, hour_str: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(date_str.trim(), "%Y%m%d")?;
        let hour = hour_str.trim().parse::<u32>().map_err(|_| {
            ProcessingError::InvalidTimestamp(format!("Invalid hour value: '{}'", hour_str))
        })?;
        Self::new(date, hour)
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl std::fmt::Display for HourlyTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:00"))
    }
}
