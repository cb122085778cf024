use anyhow::Result;
use reqwest::{Client, StatusCode};
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;
use std::time::Duration;

use crate::config;
use crate::constants::{REQUEST_TIMEOUT_SECS, USER_AGENT, WEATHER_API_BASE};
use crate::error::WeatherError;
use crate::formatters::format_report;
use crate::models::{CurrentResponse, ErrorResponse, GetWeatherRequest, WeatherReport};

/// Weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    client: Arc<Client>,
    base_url: String,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a service instance against the production WeatherAPI.com endpoint
    pub fn new() -> Result<Self> {
        Self::with_base_url(WEATHER_API_BASE)
    }

    /// Creates a service pointed at a custom provider base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.into(),
            tool_router: Self::tool_router(),
        })
    }

    /// Looks up current weather for a city.
    ///
    /// Never fails from the caller's perspective: every error is converted
    /// into its agent-facing message, so the result is always a plain string
    /// the agent can relay or reason about.
    pub async fn lookup(&self, city: &str) -> String {
        match self.fetch_current(city).await {
            Ok(report) => format_report(report),
            Err(err) => {
                tracing::warn!("Weather lookup for '{}' failed: {}", city, err);
                err.to_string()
            }
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let api_key = config::resolve_api_key().ok_or(WeatherError::NotConfigured)?;

        let url = format!("{}/current.json", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("key", api_key.as_str()), ("q", city), ("aqi", "no")])
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            // A transport failure mid-read is still a network error; only a
            // response that arrived but cannot be decoded is unexpected.
            if e.is_timeout() || e.is_connect() || e.is_body() {
                WeatherError::Network(e.to_string())
            } else {
                WeatherError::Unexpected(e.to_string())
            }
        })?;

        if status == StatusCode::BAD_REQUEST {
            return Err(WeatherError::CityNotFound(city.to_string()));
        }
        if !status.is_success() {
            return Err(WeatherError::Provider(provider_detail(status, &body)));
        }

        let parsed: CurrentResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Unexpected(e.to_string()))?;

        Ok(WeatherReport::from(parsed))
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-city-weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A current-weather lookup service powered by WeatherAPI.com. \
                Provide a city name to get temperature, condition, humidity, and wind. \
                Requires the WEATHER_API_KEY environment variable to be set."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets current weather for a city
    #[tool(description = "Get the current weather for a city. Provide a city name (e.g., 'London', 'Tokyo', 'New York'). Returns temperature, condition, humidity, and wind speed, or a descriptive error message.")]
    async fn get_weather(
        &self,
        Parameters(request): Parameters<GetWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting weather for city: {}", request.city);

        let report = self.lookup(&request.city).await;

        Ok(CallToolResult::success(vec![Content::text(report)]))
    }
}

/// Builds the detail string for a non-2xx provider response, preferring the
/// provider's own error message over the raw body.
fn provider_detail(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(envelope) => format!("HTTP {}: {}", status, envelope.error.message),
        Err(_) => format!("HTTP {}: {}", status, truncate_body(body)),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
