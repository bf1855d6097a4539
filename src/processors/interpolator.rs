use crate::models::Reading;

/// Fill every gap of `series` in place.
///
/// Interior gaps are linearly interpolated between the known values on either
/// side. A gap touching the start or end takes the nearest known value. A series
/// with no known value is left as it is.
///
/// Returns the number of slots that were filled.
pub fn interpolate_in_place(series: &mut [Reading]) -> usize {
    let n = series.len();
    let mut filled = 0;
    let mut prev: Option<f64> = None;
    let mut i = 0;

    while i < n {
        if let Reading::Value(v) = series[i] {
            prev = Some(v);
            i += 1;
            continue;
        }

        let start = i;
        while i < n && series[i].is_missing() {
            i += 1;
        }
        let end = i;
        let next = series.get(end).and_then(Reading::value);

        let gap = &mut series[start..end];
        match (prev, next) {
            (None, None) => continue,
            (None, Some(next)) => gap.fill(Reading::Value(next)),
            (Some(prev), None) => gap.fill(Reading::Value(prev)),
            (Some(prev), Some(next)) => {
                let steps = (gap.len() + 1) as f64;
                for (offset, slot) in gap.iter_mut().enumerate() {
                    let ratio = (offset + 1) as f64 / steps;
                    *slot = Reading::Value(prev + (next - prev) * ratio);
                }
            }
        }
        filled += end - start;
    }

    filled
}

/// Return a gap-filled copy of `series`
pub fn interpolate(series: &[Reading]) -> Vec<Reading> {
    let mut result = series.to_vec();
    interpolate_in_place(&mut result);
    result
}
