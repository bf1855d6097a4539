use crate::error::Result;
use crate::models::{
    CityCoordinate, CityStatistic, HourlyDataset, RankedEntry, StationRegistry, StationStatistic,
};
use crate::processors::{
    aggregate_cities, city_coordinates, interpolate_in_place, rank_cities, station_statistic,
    CoverageChecker, CoverageReport, SeasonFilter,
};
use crate::readers::{DataFileFinder, ObservationReader, StationReader};
use crate::settings::PipelineConfig;
use crate::utils::progress::ProgressReporter;
use crate::writers::{MapWriter, OutputLabels, RankingWriter};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// Inputs of a run: the discovered data files, station metadata and raw series
#[derive(Debug)]
pub struct PipelineInputs {
    pub files: Vec<PathBuf>,
    pub stations: StationRegistry,
    pub dataset: HourlyDataset,
}

/// Results of gap filling, aggregation and ranking
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub station_statistics: Vec<StationStatistic>,
    pub city_statistics: Vec<CityStatistic>,
    pub ranking: Vec<RankedEntry>,
    /// Representative coordinates of the ranked cities
    pub coordinates: HashMap<String, CityCoordinate>,
    pub filled_slots: usize,
}

impl Analysis {
    pub fn undefined_stations(&self) -> impl Iterator<Item = &StationStatistic> {
        self.station_statistics.iter().filter(|s| !s.is_defined())
    }
}

#[derive(Debug)]
pub struct PipelineOutcome {
    pub hours: usize,
    pub files_read: usize,
    pub coverage: CoverageReport,
    pub analysis: Analysis,
}

/// Fill gaps, reduce each station to its mean, average stations per city and rank the cities
pub fn analyze(mut dataset: HourlyDataset, stations: &StationRegistry) -> Analysis {
    let mut filled_slots = 0;
    let station_statistics: Vec<StationStatistic> = dataset
        .series
        .iter_mut()
        .map(|series| {
            filled_slots += interpolate_in_place(&mut series.readings);
            station_statistic(&series.code, &series.readings)
        })
        .collect();

    let city_statistics = aggregate_cities(&station_statistics, stations);
    let ranking = rank_cities(&city_statistics);

    let mut coordinates = city_coordinates(stations);
    coordinates.retain(|city, _| city_statistics.iter().any(|c| &c.city == city));

    Analysis {
        station_statistics,
        city_statistics,
        ranking,
        coordinates,
        filled_slots,
    }
}

pub struct Pipeline {
    config: PipelineConfig,
    silent: bool,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            silent: false,
        }
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Discover data files, load station metadata and read the in-scope series
    pub fn load_inputs(&self) -> Result<PipelineInputs> {
        let finder = DataFileFinder::new(&self.config.file_prefix, &self.config.file_extension);
        let files = finder.find_files(&self.config.data_dirs)?;
        info!(files = files.len(), "Discovered data files");

        let stations = StationReader::new().read_stations(&self.config.station_list)?;
        info!(stations = stations.len(), "Loaded station metadata");

        let reader = ObservationReader::new(
            &self.config.pollutant,
            SeasonFilter::new(&self.config.winter_months),
        );

        // The first file's header fixes the tracked stations for the whole run
        let header_codes = reader.read_station_codes(&files[0])?;
        let station_codes =
            reader.select_stations(&header_codes, &stations, self.config.exclude_reference_sites);
        debug!(
            header_columns = header_codes.len(),
            tracked = station_codes.len(),
            "Selected stations from first data file"
        );

        let progress = ProgressReporter::new(files.len() as u64, "Reading data files...", self.silent);
        let dataset = reader.read_dataset(&files, &station_codes, &progress)?;
        progress.finish_with_message(&format!("Read {} data files", dataset.files_read));

        info!(
            hours = dataset.hours(),
            stations = dataset.station_count(),
            skipped_rows = dataset.skipped_rows,
            "Collected in-scope hourly readings"
        );

        Ok(PipelineInputs {
            files,
            stations,
            dataset,
        })
    }

    /// Run the whole pipeline once
    pub fn run(&self) -> Result<PipelineOutcome> {
        let inputs = self.load_inputs()?;

        let coverage = CoverageChecker::new().check_coverage(&inputs.dataset, &inputs.stations);
        let hours = inputs.dataset.hours();
        let files_read = inputs.dataset.files_read;

        let analysis = analyze(inputs.dataset, &inputs.stations);
        info!(
            filled = analysis.filled_slots,
            undefined = analysis.undefined_stations().count(),
            cities = analysis.ranking.len(),
            "Ranked cities"
        );

        Ok(PipelineOutcome {
            hours,
            files_read,
            coverage,
            analysis,
        })
    }

    /// Write the ranking CSV and the map page, labelled with this run's pollutant and months.
    ///
    /// Returns the number of map markers.
    pub fn write_outputs(&self, outcome: &PipelineOutcome) -> Result<usize> {
        let labels = OutputLabels::new(&self.config.pollutant, &self.config.winter_months);
        let ranking = &outcome.analysis.ranking;

        RankingWriter::new()
            .with_labels(&labels)
            .write_ranking(ranking, &self.config.output_ranking)?;

        let markers = MapWriter::new().with_labels(&labels).write_map(
            ranking,
            &outcome.analysis.coordinates,
            &self.config.output_map,
        )?;

        info!(
            ranking = %self.config.output_ranking.display(),
            map = %self.config.output_map.display(),
            markers,
            "Wrote outputs"
        );
        Ok(markers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Reading, Station, StationSeries};
    use Reading::{Missing, Value};

    fn station(code: &str, city: &str, lat: f64, lon: f64) -> Station {
        Station::new(
            code.to_string(),
            code.to_string(),
            city.to_string(),
            lat,
            lon,
            String::new(),
        )
    }

    #[test]
    fn test_analyze_end_to_end() {
        let stations: StationRegistry = vec![
            station("A", "X", 30.0, 100.0),
            station("B", "X", 32.0, 102.0),
            station("C", "Y", 40.0, 110.0),
            station("D", "Z", 20.0, 90.0),
        ]
        .into_iter()
        .collect();

        let dataset = HourlyDataset {
            timestamps: Vec::new(),
            series: vec![
                StationSeries::with_readings("A".into(), vec![Value(5.0), Missing, Missing, Value(8.0)]),
                StationSeries::with_readings("B".into(), vec![Missing, Missing, Missing, Missing]),
                StationSeries::with_readings("C".into(), vec![Missing, Value(2.0), Value(4.0), Missing]),
            ],
            files_read: 1,
            skipped_rows: 0,
        };

        let analysis = analyze(dataset, &stations);

        assert_eq!(analysis.filled_slots, 4);
        assert_eq!(analysis.station_statistics[0].mean, Some(6.5));
        assert_eq!(analysis.station_statistics[1].mean, None);
        assert_eq!(analysis.station_statistics[2].mean, Some(3.0));
        assert_eq!(analysis.undefined_stations().count(), 1);

        let ranking: Vec<(usize, &str, f64)> = analysis
            .ranking
            .iter()
            .map(|e| (e.rank, e.city.as_str(), e.value))
            .collect();
        assert_eq!(ranking, vec![(1, "Y", 3.0), (2, "X", 6.5)]);

        // Z has metadata but no observed station
        assert!(!analysis.coordinates.contains_key("Z"));
        assert!(analysis.city_statistics.iter().all(|c| c.city != "Z"));
        // X's location uses both stations even though B has no data
        assert_eq!(analysis.coordinates["X"].latitude, 31.0);
        assert_eq!(analysis.coordinates["X"].longitude, 101.0);
    }
}
