use crate::config::types::HomepageConfig;
use crate::errors::ConfigError;
use crate::resources::ResourceKind;

/// Validate a merged configuration.
///
/// Rejects zero periods (they would spin the schedulers), endpoints that are
/// not absolute paths, and base URLs without an http(s) scheme.
pub fn validate_config(config: &HomepageConfig) -> Result<(), ConfigError> {
    let base_url = config.base_url();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
        });
    }

    if config.server.request_timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "server.request_timeout_secs must be greater than zero".to_string(),
        });
    }

    if config.clock.period_ms == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "clock.period_ms must be greater than zero".to_string(),
        });
    }

    for kind in ResourceKind::ALL {
        let section = config.poller_config(kind);

        if section.interval_secs == Some(0) {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{}.interval_secs must be greater than zero", kind),
            });
        }

        if let Some(endpoint) = &section.endpoint
            && !endpoint.starts_with('/')
        {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "{}.endpoint must be an absolute path starting with '/', got '{}'",
                    kind, endpoint
                ),
            });
        }
    }

    Ok(())
}
