use crate::constants::MAX_FORECAST_DAYS;

/// Formats a forecast for `location` into a human-readable string
///
/// The header echoes the requested day count; lines are capped at
/// [`MAX_FORECAST_DAYS`] and a non-positive count yields none.
pub fn format_forecast(location: &str, days: i32) -> String {
    let lines: Vec<String> = (1..=days.min(MAX_FORECAST_DAYS))
        .map(|day| format!("Day {}: Partly cloudy, {}\u{00b0}F", day, 60 + day * 2))
        .collect();

    format!("{}-day forecast for {}:\n{}", days, location, lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_requested_days() {
        assert_eq!(
            format_forecast("Paris", 2),
            "2-day forecast for Paris:\nDay 1: Partly cloudy, 62°F\nDay 2: Partly cloudy, 64°F"
        );
    }

    #[test]
    fn negative_days_keep_header_only() {
        assert_eq!(format_forecast("Oslo", -4), "-4-day forecast for Oslo:\n");
    }
}
