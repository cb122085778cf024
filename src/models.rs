use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// WeatherAPI.com Models
// ============================================================================

/// Successful `current.json` response, consumed fields only.
#[derive(Debug, Deserialize)]
pub struct CurrentResponse {
    pub location: Location,
    pub current: Current,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    pub humidity: u8,
    pub wind_kph: f64,
}

#[derive(Debug, Deserialize)]
pub struct Condition {
    pub text: String,
}

/// Error envelope the provider returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherRequest {
    /// The name of the city to get weather for (e.g., "London", "Tokyo", "New York")
    pub city: String,
}

// ============================================================================
// Derived Report
// ============================================================================

/// Flattened view of a current-conditions response, built immediately before
/// formatting and discarded after.
#[derive(Debug)]
pub struct WeatherReport {
    pub location: String,
    pub country: String,
    pub temperature_c: f64,
    pub temperature_f: f64,
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_kph: f64,
}

impl From<CurrentResponse> for WeatherReport {
    fn from(response: CurrentResponse) -> Self {
        Self {
            location: response.location.name,
            country: response.location.country,
            temperature_c: response.current.temp_c,
            temperature_f: response.current.temp_f,
            condition: response.current.condition.text,
            humidity_pct: response.current.humidity,
            wind_kph: response.current.wind_kph,
        }
    }
}
