//! # Configuration System
//!
//! Hierarchical TOML configuration for the dashboard controller.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.homepage/config.toml`
//! 3. **Project config** - `./.homepage/config.toml`
//! 4. **Environment** - `HOMEPAGE_BASE_URL`
//! 5. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use homepage_core::config::HomepageConfig;
//! use homepage_core::resources::ResourceKind;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HomepageConfig::load_hierarchy()?;
//!     let weather = config.poller(ResourceKind::Weather);
//!     println!("{} every {:?}", weather.endpoint, weather.interval);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{
    BackdropConfig, ClockConfig, HomepageConfig, PollerConfig, PollerSettings, ServerConfig,
};
pub use validation::validate_config;

impl HomepageConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
