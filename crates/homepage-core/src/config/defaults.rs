//! Default values for configuration.
//!
//! Config sections hold `Option`s; these constants are what the accessors on
//! [`HomepageConfig`](super::HomepageConfig) fall back to.

/// Backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV: &str = "HOMEPAGE_BASE_URL";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// The clock redraws once per second.
pub const DEFAULT_CLOCK_PERIOD_MS: u64 = 1000;

pub const DEFAULT_WEATHER_ENDPOINT: &str = "/get/weather";
pub const DEFAULT_BACKGROUND_ENDPOINT: &str = "/get/image";
pub const DEFAULT_GREETING_ENDPOINT: &str = "/get/greetings";

/// Weather and greeting refresh every 5 minutes.
pub const DEFAULT_WEATHER_INTERVAL_SECS: u64 = 5 * 60;
pub const DEFAULT_GREETING_INTERVAL_SECS: u64 = 5 * 60;

/// Background images rotate on a slower, independent cadence.
pub const DEFAULT_BACKGROUND_INTERVAL_SECS: u64 = 30 * 60;

/// Read the base URL override from the environment, ignoring blank values.
pub fn base_url_from_env() -> Option<String> {
    std::env::var(BASE_URL_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
