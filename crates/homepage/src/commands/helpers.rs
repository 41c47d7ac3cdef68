use clap::ArgMatches;
use tracing::{error, warn};

use homepage_core::{HomepageConfig, RefreshPolicy, events};

/// Load config, falling back to defaults with a visible warning.
pub fn load_config_with_warning() -> HomepageConfig {
    match HomepageConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.homepage/config.toml and ./.homepage/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            HomepageConfig::default()
        }
    }
}

/// Apply `--base-url` and `--on-refresh` from a run or snapshot invocation.
pub fn apply_overrides(config: &mut HomepageConfig, matches: &ArgMatches) {
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config.server.base_url = Some(base_url.clone());
    }
    if let Some(policy) = matches.get_one::<String>("on-refresh") {
        config.backdrop.on_refresh = Some(match policy.as_str() {
            "reset" => RefreshPolicy::Reset,
            _ => RefreshPolicy::Preserve,
        });
    }
}

/// Effective config for commands that talk to the backend.
///
/// Invalid settings are fatal here; a broken file already fell back to
/// defaults in [`load_config_with_warning`].
pub fn load_validated_config(
    matches: &ArgMatches,
    command: &str,
) -> Result<HomepageConfig, Box<dyn std::error::Error>> {
    let mut config = load_config_with_warning();
    apply_overrides(&mut config, matches);

    if let Err(e) = config.validate() {
        eprintln!("❌ Invalid configuration: {}", e);
        error!(
            event = "cli.config.validation_failed",
            command = command,
            error = %e
        );
        events::log_app_error(&e);
        return Err(e.into());
    }

    Ok(config)
}

pub fn build_runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
}
