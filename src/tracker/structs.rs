//! Data structures for tracker operations.

/// The in-memory peer registry.
///
/// Sharded map from torrent identifier to a separately locked peer-set,
/// together with the announce interval and `numwant` bounds.
pub mod peer_registry;

/// Distinct peers announced for one torrent.
pub mod torrent_peer_set;

/// One client instance: address, port and peer id.
pub mod peer;

/// Opaque client-supplied peer identifier.
pub mod peer_id;

/// Validated announce request.
///
/// Holds the announcing peer, the normalized torrent identifier and the
/// optional `numwant`.
pub mod announce_request;

/// Announce reply: interval plus sampled peers.
pub mod announce_response;
