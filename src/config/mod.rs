//! Configuration management module.
//!
//! Loads, saves and validates the tracker configuration kept in a TOML file
//! (`config.toml` unless another path is given on the command line).
//!
//! # Configuration Structure
//!
//! - **log_level** / **log_file**: logging verbosity and optional file sink
//! - **tracker_config**: announce interval and `numwant` bounds
//! - **http_server**: one entry per HTTP listener
//! - **sentry_config**: optional error reporting
//!
//! # Example
//!
//! ```rust
//! use swarm_tracker::config::structs::configuration::Configuration;
//!
//! let config = Configuration::init();
//! assert_eq!(config.tracker_config.interval, 1800);
//! assert!(config.validate().is_ok());
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
