use crate::models::{CityStatistic, RankedEntry};

/// Rank cities from lowest (best) to highest statistic.
///
/// The sort is stable, so cities with equal values keep their input order.
/// Ranks are 1-based positions in the sorted output.
pub fn rank_cities(cities: &[CityStatistic]) -> Vec<RankedEntry> {
    let mut sorted: Vec<&CityStatistic> = cities.iter().collect();
    sorted.sort_by(|a, b| a.mean.total_cmp(&b.mean));

    sorted
        .into_iter()
        .enumerate()
        .map(|(idx, city)| RankedEntry::new(idx + 1, city.city.clone(), city.mean))
        .collect()
}
