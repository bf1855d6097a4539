pub mod city_aggregator;
pub mod coverage_checker;
pub mod interpolator;
pub mod pipeline;
pub mod ranker;
pub mod season_filter;
pub mod station_aggregator;

pub use city_aggregator::{aggregate_cities, city_coordinates};
pub use coverage_checker::{CoverageChecker, CoverageReport, StationCoverage};
pub use interpolator::{interpolate, interpolate_in_place};
pub use pipeline::{analyze, Analysis, Pipeline, PipelineInputs, PipelineOutcome};
pub use ranker::rank_cities;
pub use season_filter::SeasonFilter;
pub use station_aggregator::{series_mean, station_statistic};
