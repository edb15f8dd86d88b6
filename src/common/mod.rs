//! Common utilities and shared functionality.
//!
//! Helpers used across the tracker: query string parsing, the percent-escape
//! normalization applied to torrent identifiers, logging setup and the
//! generic `CustomError` type.
//!
//! # Example
//!
//! ```rust
//! use swarm_tracker::common::common::{escape_query_value, parse_query};
//!
//! let query = parse_query(Some(String::from("info_hash=%AB%CD&port=6881")));
//! let info_hash = escape_query_value(&query["info_hash"][0]);
//! assert_eq!(info_hash, "%AB%CD");
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
