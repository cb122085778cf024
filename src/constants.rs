/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-city-weather/0.1.0";

/// WeatherAPI.com base URL
pub const WEATHER_API_BASE: &str = "http://api.weatherapi.com/v1";

/// Environment variable holding the WeatherAPI.com key
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Placeholder value shipped in `.env` templates; treated as not configured
pub const API_KEY_PLACEHOLDER: &str = "your_weather_api_key_here";

/// Timeout applied to every provider request, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
