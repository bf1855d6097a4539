use crate::models::{CityCoordinate, CityStatistic, StationRegistry, StationStatistic};
use std::collections::HashMap;
use tracing::debug;

/// Average the defined station statistics of each city.
///
/// Cities appear in the order their first station appears in `statistics`.
/// Undefined statistics and stations missing from the registry are skipped; a
/// city left with no defined statistic is not emitted.
pub fn aggregate_cities(
    statistics: &[StationStatistic],
    stations: &StationRegistry,
) -> Vec<CityStatistic> {
    let mut order: Vec<&str> = Vec::new();
    let mut grouped: HashMap<&str, Vec<f64>> = HashMap::new();

    for stat in statistics {
        let Some(station) = stations.get(&stat.code) else {
            debug!(station = %stat.code, "Station not in metadata, skipped");
            continue;
        };
        let Some(mean) = stat.mean else {
            continue;
        };

        let city = station.city.as_str();
        grouped
            .entry(city)
            .or_insert_with(|| {
                order.push(city);
                Vec::new()
            })
            .push(mean);
    }

    order
        .into_iter()
        .filter_map(|city| {
            let values = grouped.remove(city)?;
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            Some(CityStatistic {
                city: city.to_string(),
                mean,
                station_count: values.len(),
            })
        })
        .collect()
}

/// Mean latitude and longitude of every station in each city.
///
/// Independent of the statistics: stations without data still place their city.
pub fn city_coordinates(stations: &StationRegistry) -> HashMap<String, CityCoordinate> {
    let mut sums: HashMap<&str, (f64, f64, usize)> = HashMap::new();

    for station in stations.iter() {
        let entry = sums.entry(station.city.as_str()).or_insert((0.0, 0.0, 0));
        entry.0 += station.latitude;
        entry.1 += station.longitude;
        entry.2 += 1;
    }

    sums.into_iter()
        .map(|(city, (lat_sum, lon_sum, count))| {
            (
                city.to_string(),
                CityCoordinate {
                    latitude: lat_sum / count as f64,
                    longitude: lon_sum / count as f64,
                },
            )
        })
        .collect()
}
