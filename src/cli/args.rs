use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::settings::PipelineConfig;

#[derive(Parser)]
#[command(name = "winter-aqi")]
#[command(about = "Rank cities by winter air quality from hourly station data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide progress bars")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank cities and write the ranking table and map
    Rank {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, help = "Ranking CSV output path")]
        output_ranking: Option<PathBuf>,

        #[arg(long, help = "HTML map output path")]
        output_map: Option<PathBuf>,

        #[arg(long, help = "Number of cities printed to the console")]
        top: Option<usize>,
    },

    /// Report data files and station coverage without writing outputs
    Inspect {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Input selection shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    #[arg(short, long = "data-dir", help = "Directory with hourly data files (repeatable)")]
    pub data_dirs: Vec<PathBuf>,

    #[arg(short, long, help = "Station list CSV")]
    pub stations: Option<PathBuf>,

    #[arg(short, long, value_delimiter = ',', help = "In-scope months, e.g. 11,12,1,2")]
    pub months: Option<Vec<u32>>,

    #[arg(short, long, help = "Row type to analyse, e.g. AQI")]
    pub pollutant: Option<String>,

    #[arg(long, help = "Leave out reference (control) sites")]
    pub exclude_reference_sites: bool,
}

impl InputArgs {
    /// Apply the flags that were given on top of `config`
    pub fn apply(&self, mut config: PipelineConfig) -> PipelineConfig {
        if !self.data_dirs.is_empty() {
            config = config.with_data_dirs(self.data_dirs.clone());
        }
        if let Some(stations) = &self.stations {
            config = config.with_station_list(stations.clone());
        }
        if let Some(months) = &self.months {
            config = config.with_winter_months(months.clone());
        }
        if let Some(pollutant) = &self.pollutant {
            config = config.with_pollutant(pollutant);
        }
        if self.exclude_reference_sites {
            config = config.with_exclude_reference_sites(true);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rank_flags() {
        let cli = Cli::try_parse_from([
            "winter-aqi",
            "rank",
            "-d",
            "data/2022",
            "-d",
            "data/2023",
            "--months",
            "12,1",
            "--top",
            "5",
        ])
        .unwrap();

        match cli.command {
            Commands::Rank { input, top, .. } => {
                assert_eq!(input.data_dirs.len(), 2);
                assert_eq!(input.months, Some(vec![12, 1]));
                assert_eq!(top, Some(5));
            }
            Commands::Inspect { .. } => panic!("expected rank"),
        }
    }

    #[test]
    fn test_apply_overrides_only_given_flags() {
        let input = InputArgs {
            pollutant: Some("PM2.5".to_string()),
            exclude_reference_sites: true,
            ..Default::default()
        };
        let config = input.apply(PipelineConfig::default());

        assert_eq!(config.pollutant, "PM2.5");
        assert!(config.exclude_reference_sites);
        assert_eq!(config.data_dirs, PipelineConfig::default().data_dirs);
        assert_eq!(config.winter_months, vec![11, 12, 1, 2]);
    }
}
