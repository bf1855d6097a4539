use crate::models::{Reading, StationStatistic};
use tracing::warn;

/// Arithmetic mean of the known values of a series, `None` when there are none
pub fn series_mean(series: &[Reading]) -> Option<f64> {
    let (sum, count) = series
        .iter()
        .filter_map(Reading::value)
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Reduce a station's reconstructed series to its statistic.
///
/// A series without any value yields an undefined statistic, which is logged
/// and later excluded from city aggregation.
pub fn station_statistic(code: &str, series: &[Reading]) -> StationStatistic {
    let samples = series.iter().filter(|r| !r.is_missing()).count();
    let mean = series_mean(series);

    if mean.is_none() {
        warn!(
            station = code,
            slots = series.len(),
            "Station has no readings in scope, statistic undefined"
        );
    }

    StationStatistic {
        code: code.to_string(),
        mean,
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Reading::{Missing, Value};

    #[test]
    fn test_mean_of_values() {
        let series = vec![Value(5.0), Value(6.0), Value(7.0), Value(8.0)];
        assert_eq!(series_mean(&series), Some(6.5));
    }

    #[test]
    fn test_mean_ignores_missing() {
        let series = vec![Value(10.0), Missing, Value(20.0)];
        assert_eq!(series_mean(&series), Some(15.0));
    }

    #[test]
    fn test_mean_is_order_invariant() {
        let forward = vec![Value(12.5), Value(80.0), Value(33.25), Value(41.0)];
        let mut reversed = forward.clone();
        reversed.reverse();
        let mut shuffled = forward.clone();
        shuffled.swap(0, 2);

        let expected = (12.5 + 80.0 + 33.25 + 41.0) / 4.0;
        for series in [forward, reversed, shuffled] {
            let mean = series_mean(&series).unwrap();
            assert!((mean - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_undefined_statistic() {
        let stat = station_statistic("1001A", &[Missing, Missing]);
        assert_eq!(stat.code, "1001A");
        assert_eq!(stat.mean, None);
        assert_eq!(stat.samples, 0);
        assert!(!stat.is_defined());
    }

    #[test]
    fn test_empty_series_is_undefined() {
        assert_eq!(series_mean(&[]), None);
    }

    #[test]
    fn test_station_statistic_counts_samples() {
        let stat = station_statistic("1002A", &[Value(40.0), Value(60.0)]);
        assert_eq!(stat.mean, Some(50.0));
        assert_eq!(stat.samples, 2);
        assert!(stat.is_defined());
    }
}
