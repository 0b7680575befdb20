//! Formatting helpers for presenting metrics.

pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}%")
    } else {
        "—".to_string()
    }
}

pub fn format_number(value: f64, digits: usize) -> String {
    if value.is_finite() {
        format!("{value:.digits$}")
    } else {
        "—".to_string()
    }
}

/// Compact axis tick label: integers stay bare, large/small magnitudes go scientific.
pub fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 {
        "0".to_string()
    } else if !(1e-3..1e5).contains(&magnitude) {
        format!("{value:.1e}")
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else if magnitude >= 10.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_stay_short() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(12.0), "12");
        assert_eq!(format_tick(12.345), "12.3");
        assert_eq!(format_tick(-0.25), "-0.25");
        assert_eq!(format_tick(250000.0), "2.5e5");
    }

    #[test]
    fn non_finite_values_render_as_dash() {
        assert_eq!(format_percent(f64::NAN), "—");
        assert_eq!(format_number(f64::INFINITY, 2), "—");
        assert_eq!(format_percent(85.0), "85.00%");
    }
}
