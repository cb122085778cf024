use crate::models::WeatherReport;

/// Renders a weather report into the fixed multi-line template the agent
/// relays to the user.
pub fn format_report(report: WeatherReport) -> String {
    format!(
        "Weather for {}, {}:\n🌡️ Temperature: {}°C ({}°F)\n☁️ Condition: {}\n💧 Humidity: {}%\n💨 Wind: {} km/h",
        report.location,
        report.country,
        report.temperature_c,
        report.temperature_f,
        report.condition,
        report.humidity_pct,
        report.wind_kph
    )
}
