//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Core tracker settings (interval, peer counts).
pub mod tracker_config;

/// HTTP server configuration.
pub mod http_trackers_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
