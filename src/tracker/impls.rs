//! Implementation blocks for tracker data structures.
//!
//! Implementations are organized by the struct they extend.

/// Display and serialization support for `AnnounceError`.
pub mod announce_error;

/// Request validation for `AnnounceRequest`.
pub mod announce_request;

/// Bencode encoding of `AnnounceResponse`.
pub mod announce_response;

/// Constructors and formatting for `Peer`.
pub mod peer;

/// Conversions and formatting for `PeerId`.
pub mod peer_id;

/// Shard lookup, registration and sampling on `PeerRegistry`.
pub mod peer_registry;

/// Announce handling on `PeerRegistry` (validate, register, sample, encode, write).
pub mod peer_registry_handlers;

/// Insertion and random sampling on `TorrentPeerSet`.
pub mod torrent_peer_set;
