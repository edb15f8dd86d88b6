//! Enumerations for tracker operations.

/// Reasons an announce could not be answered with a peer list.
pub mod announce_error;
