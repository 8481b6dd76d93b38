use crate::model::WeatherReport;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Render the fixed multi-line text block for a report.
pub fn format_report(report: &WeatherReport) -> String {
    format!(
        "🌤️ Weather Report for {}, {}\n\
         {RULE}\n\
         🌡️  Temperature: {:.1}°C (feels like {:.1}°C)\n\
         ☁️  Conditions: {}\n\
         💧 Humidity: {}%\n\
         💨 Wind Speed: {:.1} m/s\n\
         ⏰ Updated: {}\n\
         {RULE}",
        report.location(),
        report.country(),
        report.temperature(),
        report.feels_like(),
        report.description(),
        report.humidity(),
        report.wind_speed(),
        report.timestamp(),
    )
}
