use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::{
    DEFAULT_DATA_DIRS, DEFAULT_FILE_EXTENSION, DEFAULT_FILE_PREFIX, DEFAULT_MAP_OUTPUT,
    DEFAULT_POLLUTANT, DEFAULT_RANKING_OUTPUT, DEFAULT_STATION_LIST, DEFAULT_TOP_N, WINTER_MONTHS,
};

pub const ENV_PREFIX: &str = "WINTER_AQI";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directories scanned for hourly data files, in order
    #[validate(length(min = 1))]
    pub data_dirs: Vec<PathBuf>,

    pub file_prefix: String,

    pub file_extension: String,

    pub station_list: PathBuf,

    /// Months (1-12) included in the analysis
    pub winter_months: Vec<u32>,

    /// Row type selected from the data files, e.g. "AQI"
    #[validate(length(min = 1))]
    pub pollutant: String,

    pub exclude_reference_sites: bool,

    pub output_ranking: PathBuf,

    pub output_map: PathBuf,

    #[validate(range(min = 1))]
    pub top_n: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dirs: DEFAULT_DATA_DIRS.iter().map(PathBuf::from).collect(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            station_list: PathBuf::from(DEFAULT_STATION_LIST),
            winter_months: WINTER_MONTHS.to_vec(),
            pollutant: DEFAULT_POLLUTANT.to_string(),
            exclude_reference_sites: false,
            output_ranking: PathBuf::from(DEFAULT_RANKING_OUTPUT),
            output_map: PathBuf::from(DEFAULT_MAP_OUTPUT),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl PipelineConfig {
    /// Layer an optional TOML file and `WINTER_AQI_*` environment variables over the defaults.
    ///
    /// Not validated here: CLI flags may still override a value, so callers run
    /// [`PipelineConfig::check`] once everything is applied.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ProcessingError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("data_dirs")
                    .with_list_parse_key("winter_months"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate field constraints and the month set
    pub fn check(&self) -> Result<()> {
        self.validate()?;

        if self.winter_months.is_empty() {
            return Err(ProcessingError::Config(
                "At least one in-scope month is required".to_string(),
            ));
        }

        if let Some(month) = self.winter_months.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(ProcessingError::Config(format!(
                "Months must be between 1 and 12, got: {}",
                month
            )));
        }

        Ok(())
    }

    pub fn with_data_dirs(mut self, data_dirs: Vec<PathBuf>) -> Self {
        self.data_dirs = data_dirs;
        self
    }

    pub fn with_station_list(mut self, station_list: PathBuf) -> Self {
        self.station_list = station_list;
        self
    }

    pub fn with_winter_months(mut self, months: Vec<u32>) -> Self {
        self.winter_months = months;
        self
    }

    pub fn with_pollutant(mut self, pollutant: &str) -> Self {
        self.pollutant = pollutant.to_string();
        self
    }

    pub fn with_exclude_reference_sites(mut self, exclude: bool) -> Self {
        self.exclude_reference_sites = exclude;
        self
    }

    pub fn with_output_ranking(mut self, path: PathBuf) -> Self {
        self.output_ranking = path;
        self
    }

    pub fn with_output_map(mut self, path: PathBuf) -> Self {
        self.output_map = path;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}
