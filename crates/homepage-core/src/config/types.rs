//! Configuration type definitions for Homepage.
//!
//! Every field is optional so that partial config files merge cleanly: a
//! value is only overridden when a later source actually sets it. Resolved
//! values (with defaults applied) are read through the accessor methods.
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! base_url = "http://raspberrypi.local:8000"
//! method = "get"
//! request_timeout_secs = 10
//!
//! [clock]
//! period_ms = 1000
//!
//! [weather]
//! endpoint = "/get/weather"
//! interval_secs = 300
//!
//! [background]
//! interval_secs = 1800
//!
//! [greeting]
//! enabled = false
//!
//! [backdrop]
//! on_refresh = "preserve"
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::backdrop::RefreshPolicy;
use crate::fetch::RequestMethod;
use crate::resources::ResourceKind;

/// Main configuration loaded from TOML config files.
///
/// Loaded from (later overrides earlier):
/// 1. User config: `~/.homepage/config.toml`
/// 2. Project config: `./.homepage/config.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HomepageConfig {
    /// Backend connection settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Clock refresh settings
    #[serde(default)]
    pub clock: ClockConfig,

    /// Weather poller settings
    #[serde(default)]
    pub weather: PollerConfig,

    /// Background image poller settings
    #[serde(default)]
    pub background: PollerConfig,

    /// Greeting poller settings
    #[serde(default)]
    pub greeting: PollerConfig,

    /// Backdrop (blur toggle) behavior
    #[serde(default)]
    pub backdrop: BackdropConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ServerConfig {
    /// Base URL every endpoint is resolved against.
    /// Default: `http://localhost:8000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// HTTP method used for resource requests (`get` or `post`).
    /// Default: `get`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<RequestMethod>,

    /// Per-request timeout in seconds.
    /// Default: 10 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

/// Clock refresh settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClockConfig {
    /// Fixed-rate tick period in milliseconds.
    /// Default: 1000ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_ms: Option<u64>,
}

/// Settings for a single resource poller.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PollerConfig {
    /// Relative endpoint path, e.g. `/get/weather`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Delay between the end of one poll and the start of the next.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_secs: Option<u64>,

    /// Whether the poller runs at all.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Backdrop behavior.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BackdropConfig {
    /// What a freshly applied background does to the blur toggle.
    /// Default: `preserve`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_refresh: Option<RefreshPolicy>,
}

/// Fully resolved settings for one poller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerSettings {
    pub kind: ResourceKind,
    pub endpoint: String,
    pub interval: Duration,
    pub enabled: bool,
}

impl HomepageConfig {
    pub fn base_url(&self) -> &str {
        self.server
            .base_url
            .as_deref()
            .unwrap_or(super::defaults::DEFAULT_BASE_URL)
    }

    pub fn request_method(&self) -> RequestMethod {
        self.server.method.unwrap_or_default()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.server
                .request_timeout_secs
                .unwrap_or(super::defaults::DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn clock_period(&self) -> Duration {
        Duration::from_millis(
            self.clock
                .period_ms
                .unwrap_or(super::defaults::DEFAULT_CLOCK_PERIOD_MS),
        )
    }

    pub fn refresh_policy(&self) -> RefreshPolicy {
        self.backdrop.on_refresh.unwrap_or_default()
    }

    /// Raw poller section for a resource kind.
    pub fn poller_config(&self, kind: ResourceKind) -> &PollerConfig {
        match kind {
            ResourceKind::Weather => &self.weather,
            ResourceKind::Background => &self.background,
            ResourceKind::Greeting => &self.greeting,
        }
    }

    /// Copy with every default written out, as the dashboard will see it.
    pub fn resolved(&self) -> HomepageConfig {
        let section = |kind: ResourceKind| {
            let settings = self.poller(kind);
            PollerConfig {
                endpoint: Some(settings.endpoint),
                interval_secs: Some(settings.interval.as_secs()),
                enabled: Some(settings.enabled),
            }
        };

        HomepageConfig {
            server: ServerConfig {
                base_url: Some(self.base_url().to_string()),
                method: Some(self.request_method()),
                request_timeout_secs: Some(self.request_timeout().as_secs()),
            },
            clock: ClockConfig {
                period_ms: Some(self.clock_period().as_millis() as u64),
            },
            weather: section(ResourceKind::Weather),
            background: section(ResourceKind::Background),
            greeting: section(ResourceKind::Greeting),
            backdrop: BackdropConfig {
                on_refresh: Some(self.refresh_policy()),
            },
        }
    }

    /// Resolved poller settings with defaults applied.
    pub fn poller(&self, kind: ResourceKind) -> PollerSettings {
        let section = self.poller_config(kind);
        PollerSettings {
            kind,
            endpoint: section
                .endpoint
                .clone()
                .unwrap_or_else(|| kind.default_endpoint().to_string()),
            interval: Duration::from_secs(
                section
                    .interval_secs
                    .unwrap_or_else(|| kind.default_interval_secs()),
            ),
            enabled: section.enabled.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_homepage_config_serialization() {
        let config = HomepageConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: HomepageConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_default_accessors() {
        let config = HomepageConfig::default();
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(config.request_method(), RequestMethod::Get);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.clock_period(), Duration::from_secs(1));
        assert_eq!(config.refresh_policy(), RefreshPolicy::Preserve);
    }

    #[test]
    fn test_poller_defaults_per_kind() {
        let config = HomepageConfig::default();

        let weather = config.poller(ResourceKind::Weather);
        assert_eq!(weather.endpoint, "/get/weather");
        assert_eq!(weather.interval, Duration::from_secs(300));
        assert!(weather.enabled);

        let background = config.poller(ResourceKind::Background);
        assert_eq!(background.endpoint, "/get/image");
        assert_eq!(background.interval, Duration::from_secs(1800));

        let greeting = config.poller(ResourceKind::Greeting);
        assert_eq!(greeting.endpoint, "/get/greetings");
        assert_eq!(greeting.interval, Duration::from_secs(300));
    }

    #[test]
    fn test_resolved_fills_every_field() {
        let mut config = HomepageConfig::default();
        config.weather.interval_secs = Some(60);

        let resolved = config.resolved();
        assert_eq!(resolved.weather.interval_secs, Some(60));
        assert_eq!(resolved.background.interval_secs, Some(1800));
        assert_eq!(
            resolved.server.base_url.as_deref(),
            Some("http://localhost:8000")
        );
        assert_eq!(resolved.backdrop.on_refresh, Some(RefreshPolicy::Preserve));

        let toml_str = toml::to_string_pretty(&resolved).unwrap();
        assert!(toml_str.contains("on_refresh = \"preserve\""));
        assert!(toml_str.contains("method = \"get\""));
    }

    #[test]
    fn test_poller_section_deserialize() {
        let toml_str = r#"
endpoint = "/getweather/"
interval_secs = 60
enabled = false
"#;
        let section: PollerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(section.endpoint, Some("/getweather/".to_string()));
        assert_eq!(section.interval_secs, Some(60));
        assert_eq!(section.enabled, Some(false));
    }

    #[test]
    fn test_partial_section_keeps_kind_defaults() {
        let config: HomepageConfig = toml::from_str(
            r#"
[background]
interval_secs = 600
"#,
        )
        .unwrap();
        let background = config.poller(ResourceKind::Background);
        assert_eq!(background.endpoint, "/get/image");
        assert_eq!(background.interval, Duration::from_secs(600));
    }
}
