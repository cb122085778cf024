use std::env;

use crate::constants::{API_KEY_ENV, API_KEY_PLACEHOLDER};

/// Reads the WeatherAPI.com key from the environment.
///
/// Returns `None` when the variable is unset, empty, or still holds the
/// placeholder value shipped in `.env` templates. The key is read on every
/// call rather than cached.
pub fn resolve_api_key() -> Option<String> {
    api_key_from(env::var(API_KEY_ENV).ok())
}

fn api_key_from(value: Option<String>) -> Option<String> {
    value.filter(|key| !key.is_empty() && key.as_str() != API_KEY_PLACEHOLDER)
}
