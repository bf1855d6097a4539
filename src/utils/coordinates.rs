use crate::error::{ProcessingError, Result};

/// Parse a decimal-degree coordinate cell
///
/// # Examples
/// ```
/// use winter_aqi::utils::parse_coordinate;
///
/// assert_eq!(parse_coordinate(" 116.40 ").unwrap(), 116.40);
/// assert!(parse_coordinate("39:54:27").is_err());
/// ```
pub fn parse_coordinate(coord_str: &str) -> Result<f64> {
    coord_str
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            ProcessingError::InvalidFormat(format!("Invalid coordinate value: '{}'", coord_str))
        })
}

/// Parse a station list coordinate, falling back to 0.0 when the cell is empty or malformed
pub fn parse_coordinate_or_default(coord_str: &str) -> f64 {
    parse_coordinate(coord_str).unwrap_or(0.0)
}
