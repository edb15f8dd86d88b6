//! HTTP front end of the tracker.
//!
//! # Endpoints
//!
//! - `GET /announce` - register the caller and return a bencoded peer list
//! - `GET /` - HTML list of every torrent seen so far
//! - `GET /info/{hash}` - HTML list of the peers of one torrent
//!
//! Anything else answers 404 with a short plain-text body.
//!
//! # Response Format
//!
//! Announce replies are bencoded dictionaries of the form
//! `d8:intervali<secs>e5:peersl<peer dicts>ee`. A rejected announce is
//! still answered with status 200; its body is the plain-text reason.

/// Data structures for HTTP request handling.
pub mod structs;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
