//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.homepage/config.toml` (global user preferences)
//! 3. **Project config** - `./.homepage/config.toml` (directory-specific overrides)
//! 4. **Environment** - `HOMEPAGE_BASE_URL`
//! 5. **CLI arguments** - Command-line flags (highest priority, applied by the CLI)

use crate::config::defaults::base_url_from_env;
use crate::config::types::{
    BackdropConfig, ClockConfig, HomepageConfig, PollerConfig, ServerConfig,
};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name used for both user and project config.
pub const CONFIG_DIR_NAME: &str = ".homepage";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be parsed, or if the
/// merged result fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<HomepageConfig, ConfigError> {
    let project_dir = std::env::current_dir()?;
    load_hierarchy_from(dirs::home_dir().as_deref(), &project_dir)
}

/// Load the hierarchy using explicit home and project directories.
pub fn load_hierarchy_from(
    home_dir: Option<&Path>,
    project_dir: &Path,
) -> Result<HomepageConfig, ConfigError> {
    let mut config = HomepageConfig::default();

    if let Some(home) = home_dir {
        match load_config_file(&config_path_in(home)) {
            Ok(user_config) => config = merge_configs(config, user_config),
            Err(ConfigError::ConfigNotFound { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    match load_config_file(&config_path_in(project_dir)) {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(ConfigError::ConfigNotFound { .. }) => {}
        Err(e) => return Err(e),
    }

    if let Some(base_url) = base_url_from_env() {
        debug!(
            event = "core.config.env_override_applied",
            base_url = base_url
        );
        config.server.base_url = Some(base_url);
    }

    validate_config(&config)?;

    Ok(config)
}

fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<HomepageConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn merge_poller(base: PollerConfig, override_config: PollerConfig) -> PollerConfig {
    PollerConfig {
        endpoint: override_config.endpoint.or(base.endpoint),
        interval_secs: override_config.interval_secs.or(base.interval_secs),
        enabled: override_config.enabled.or(base.enabled),
    }
}

/// Merge two configurations, with override_config taking precedence.
///
/// A value in the override replaces the base value only if it is present.
pub fn merge_configs(base: HomepageConfig, override_config: HomepageConfig) -> HomepageConfig {
    HomepageConfig {
        server: ServerConfig {
            base_url: override_config.server.base_url.or(base.server.base_url),
            method: override_config.server.method.or(base.server.method),
            request_timeout_secs: override_config
                .server
                .request_timeout_secs
                .or(base.server.request_timeout_secs),
        },
        clock: ClockConfig {
            period_ms: override_config.clock.period_ms.or(base.clock.period_ms),
        },
        weather: merge_poller(base.weather, override_config.weather),
        background: merge_poller(base.background, override_config.background),
        greeting: merge_poller(base.greeting, override_config.greeting),
        backdrop: BackdropConfig {
            on_refresh: override_config
                .backdrop
                .on_refresh
                .or(base.backdrop.on_refresh),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backdrop::RefreshPolicy;
    use crate::fetch::RequestMethod;
    use crate::resources::ResourceKind;
    use std::time::Duration;

    fn write_config(dir: &Path, content: &str) {
        let config_dir = dir.join(CONFIG_DIR_NAME);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join(CONFIG_FILE_NAME), content).unwrap();
    }

    #[test]
    fn test_missing_files_yield_defaults() {
        let home = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();

        let config = load_hierarchy_from(Some(home.path()), project.path()).unwrap();
        // Only the env override may differ from pure defaults
        assert_eq!(config.clock, ClockConfig::default());
        assert_eq!(config.weather, PollerConfig::default());
    }

    #[test]
    fn test_config_hierarchy_integration() {
        let home = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();

        write_config(
            home.path(),
            r#"
[server]
method = "post"
request_timeout_secs = 3

[weather]
endpoint = "/getweather/"
interval_secs = 120
"#,
        );
        write_config(
            project.path(),
            r#"
[weather]
interval_secs = 60

[backdrop]
on_refresh = "reset"
"#,
        );

        let user_config = load_config_file(&config_path_in(home.path())).unwrap();
        assert_eq!(user_config.server.method, Some(RequestMethod::Post));

        let project_config = load_config_file(&config_path_in(project.path())).unwrap();
        assert_eq!(project_config.weather.interval_secs, Some(60));

        let merged = merge_configs(user_config, project_config);
        assert_eq!(merged.request_method(), RequestMethod::Post); // From user
        assert_eq!(merged.request_timeout(), Duration::from_secs(3)); // From user
        let weather = merged.poller(ResourceKind::Weather);
        assert_eq!(weather.endpoint, "/getweather/"); // From user
        assert_eq!(weather.interval, Duration::from_secs(60)); // From project
        assert_eq!(merged.refresh_policy(), RefreshPolicy::Reset); // From project
    }

    #[test]
    fn test_merge_keeps_base_when_override_absent() {
        let base: HomepageConfig = toml::from_str(
            r#"
[clock]
period_ms = 500
"#,
        )
        .unwrap();
        let override_config: HomepageConfig = toml::from_str(
            r#"
[greeting]
enabled = false
"#,
        )
        .unwrap();

        let merged = merge_configs(base, override_config);
        assert_eq!(merged.clock_period(), Duration::from_millis(500));
        assert!(!merged.poller(ResourceKind::Greeting).enabled);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let home = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();
        write_config(project.path(), "invalid toml [[[");

        let result = load_hierarchy_from(Some(home.path()), project.path());
        assert!(matches!(
            result,
            Err(ConfigError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_file(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_invalid_merged_config_fails_validation() {
        let project = tempfile::tempdir().unwrap();
        write_config(
            project.path(),
            r#"
[weather]
interval_secs = 0
"#,
        );

        let result = load_hierarchy_from(None, project.path());
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_toml_parsing_edge_cases() {
        let empty_config: HomepageConfig = toml::from_str("").unwrap();
        assert_eq!(empty_config, HomepageConfig::default());

        let invalid_result: Result<HomepageConfig, _> =
            toml::from_str("[backdrop]\non_refresh = \"sometimes\"");
        assert!(invalid_result.is_err());
    }
}
