/// Loading, saving, defaults and validation of `Configuration`.
pub mod configuration;

/// Display and Error implementations for `ConfigurationError`.
pub mod configuration_error;

/// Defaults for the per-section configuration structs.
pub mod section_defaults;
