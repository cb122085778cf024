use thiserror::Error;

/// Failure classification for a weather lookup.
///
/// The display strings are the exact messages handed back to the calling
/// agent, so no second mapping layer exists between classification and what
/// the agent reads. Classification is ordered: configuration is checked
/// before any network activity, transport failures are classified before the
/// HTTP status, and anything left over falls through to `Unexpected`.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No usable API key in the environment; no request was attempted.
    #[error("Error: Weather API key not configured. Please add WEATHER_API_KEY to your .env file.")]
    NotConfigured,

    /// The provider answered HTTP 400, meaning it could not resolve the city.
    #[error("Sorry, I couldn't find weather data for '{0}'. Please check the city name.")]
    CityNotFound(String),

    /// Any other non-2xx provider response; carries the status and detail.
    #[error("Error fetching weather: {0}")]
    Provider(String),

    /// Transport-level failure before a response was obtained.
    #[error("Network error: Could not connect to weather service. {0}")]
    Network(String),

    /// Anything else, typically a response body that does not match the
    /// provider contract.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
