//! MCP server exposing a single current-weather lookup tool.
//!
//! This crate defines:
//! - The `get_weather` tool: takes a city name, queries WeatherAPI.com, and
//!   renders a short human-readable report
//! - An error taxonomy whose display strings double as the agent-facing
//!   failure messages (the tool never surfaces a protocol error)
//! - The stdio serving shell wiring the tool into an MCP host
//!
//! The binary in `main.rs` serves this over stdio; the library surface exists
//! so integration tests can drive the service against a mock provider.

pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod service;

pub use error::WeatherError;
pub use service::Weather;
