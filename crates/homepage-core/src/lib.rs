//! homepage-core: Refresh controller for a personal dashboard page
//!
//! Keeps a clock ticking, polls a small backend for weather, a background
//! image and a greeting, and drives the blur toggle on the background. All
//! output goes through the [`surface::Surface`] trait.
//!
//! # Main Entry Points
//!
//! - [`dashboard`] - Bind components to a surface, refresh once or run
//! - [`clock`] - Wall-clock formatting and idempotent rendering
//! - [`poller`] - Periodic resource fetch and render
//! - [`backdrop`] - Blurred/unblurred state toggle
//! - [`config`] - Configuration management

pub mod backdrop;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod events;
pub mod fetch;
pub mod logging;
pub mod poller;
pub mod resources;
pub mod schedule;
pub mod surface;

// Re-export commonly used types at crate root for convenience
pub use backdrop::{BackdropController, BackdropState, RefreshPolicy};
pub use clock::{ClockRenderer, ClockSnapshot};
pub use config::HomepageConfig;
pub use dashboard::{Board, Dashboard, DashboardError, DashboardHandle, RefreshReport};
pub use errors::{ConfigError, HomepageError};
pub use fetch::{FetchError, HttpTransport, RequestMethod, Transport};
pub use resources::{BackgroundImage, Greeting, ResourceKind, WeatherReading};
pub use surface::{MemorySurface, Mutation, MutationKind, NodeHandle, Selector, Surface};

// Re-export logging initialization
pub use logging::init_logging;
