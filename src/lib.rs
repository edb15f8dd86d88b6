//! # Swarm Tracker
//!
//! A small in-memory BitTorrent tracker served over HTTP with actix-web.
//!
//! ## Overview
//!
//! Peers announce themselves for a torrent with `GET /announce`. The tracker
//! remembers every `(ip, port, peer_id)` it has seen per torrent and answers
//! with a random sample of the other peers in the same swarm, bencoded as in
//! BEP 3. Nothing is persisted and peers are never expired; the registry
//! lives for as long as the process does.
//!
//! ## Quick Start
//!
//! ```rust
//! use swarm_tracker::config::structs::tracker_config::TrackerConfig;
//! use swarm_tracker::tracker::structs::peer_registry::PeerRegistry;
//!
//! let registry = PeerRegistry::new(TrackerConfig::default());
//! let query = swarm_tracker::common::common::parse_query(Some(String::from(
//!     "info_hash=abcdeabcdeabcdeabcde&peer_id=01234567890123456789&port=2048"
//! )));
//! let mut body = Vec::new();
//! registry.serve_announce(Some("127.0.0.1:4000".parse().unwrap()), &query, &mut body).unwrap();
//! assert_eq!(body, b"d8:intervali1800e5:peerslee");
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Query parsing, escaping, logging setup and shared errors
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - actix-web routes and server bootstrap
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Peer registry, announce validation and response encoding

/// Common utilities and shared functionality.
///
/// Contains helper functions for query parsing, percent escaping, HTML
/// escaping, logging setup, and error handling used across all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// HTTP tracker front end.
///
/// Serves announces plus two HTML pages listing torrents and their peers.
pub mod http;

/// CLI argument parsing.
pub mod structs;

/// Core tracker logic module.
///
/// Contains the sharded peer registry, announce validation, peer sampling
/// and the bencoded announce response.
pub mod tracker;
