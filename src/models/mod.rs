pub mod observation;
pub mod series;
pub mod station;
pub mod statistics;

pub use observation::{HourlyTimestamp, Reading};
pub use series::{HourlyDataset, StationSeries};
pub use station::{Station, StationRegistry};
pub use statistics::{CityCoordinate, CityStatistic, RankedEntry, StationStatistic};
