use crate::utils::constants::UNIFORM_COLOR;

/// Map a value onto a green-to-red scale spanning `[min_val, max_val]`.
///
/// Low values are green, high values red. When the range is empty every value
/// gets the same green.
///
/// # Examples
/// ```
/// use winter_aqi::utils::value_to_color;
///
/// assert_eq!(value_to_color(10.0, 10.0, 20.0), "#00ff00");
/// assert_eq!(value_to_color(20.0, 10.0, 20.0), "#ff0000");
/// ```
pub fn value_to_color(value: f64, min_val: f64, max_val: f64) -> String {
    if max_val == min_val {
        return UNIFORM_COLOR.to_string();
    }

    let ratio = ((value - min_val) / (max_val - min_val)).clamp(0.0, 1.0);
    let r = (255.0 * ratio) as u8;
    let g = (255.0 * (1.0 - ratio)) as u8;
    let b = 0u8;

    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_endpoints() {
        assert_eq!(value_to_color(0.0, 0.0, 100.0), "#00ff00");
        assert_eq!(value_to_color(100.0, 0.0, 100.0), "#ff0000");
    }

    #[test]
    fn test_color_midpoint_truncates() {
        // 255 * 0.5 = 127.5 on both channels
        assert_eq!(value_to_color(50.0, 0.0, 100.0), "#7f7f00");
    }

    #[test]
    fn test_color_clamps_out_of_range() {
        assert_eq!(value_to_color(-10.0, 0.0, 100.0), "#00ff00");
        assert_eq!(value_to_color(150.0, 0.0, 100.0), "#ff0000");
    }

    #[test]
    fn test_color_uniform_range() {
        assert_eq!(value_to_color(42.0, 42.0, 42.0), UNIFORM_COLOR);
    }
}
