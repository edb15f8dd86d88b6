//! Core tracker implementation: the peer registry and the announce protocol.
//!
//! # Architecture
//!
//! Peers are kept in memory only, grouped per torrent identifier:
//! - Torrent identifiers are distributed across 256 shards by hash
//! - Each shard is a `RwLock` around a map of identifier to peer-set handle
//! - Each peer-set has its own `RwLock`, so traffic for different torrents
//!   never waits on the same lock once the set exists
//!
//! A shard lock is only held to find or create a peer-set handle; it is
//! released before the peer-set itself is locked.
//!
//! # Main Components
//!
//! - `PeerRegistry` - torrent identifier to peer-set store, plus announce settings
//! - `TorrentPeerSet` - the distinct peers announced for one torrent
//! - `Peer` - address, port and peer id of one client instance
//! - `AnnounceRequest` - validated announce parameters
//! - `AnnounceResponse` - interval and sampled peers, bencoded on the wire
//!
//! # Example
//!
//! ```rust
//! use std::net::{IpAddr, Ipv4Addr};
//! use swarm_tracker::config::structs::tracker_config::TrackerConfig;
//! use swarm_tracker::tracker::structs::peer::Peer;
//! use swarm_tracker::tracker::structs::peer_id::PeerId;
//! use swarm_tracker::tracker::structs::peer_registry::PeerRegistry;
//!
//! let registry = PeerRegistry::new(TrackerConfig::default());
//! let seeder = Peer::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 6881, PeerId::from(&b"-XX0001-000000000001"[..]));
//! let leecher = Peer::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 6882, PeerId::from(&b"-XX0001-000000000002"[..]));
//!
//! registry.register("abcdeabcdeabcdeabcde", seeder.clone());
//! registry.register("abcdeabcdeabcdeabcde", leecher.clone());
//!
//! let sample = registry.sample("abcdeabcdeabcdeabcde", &leecher, 50);
//! assert_eq!(sample, vec![seeder]);
//! ```

/// Enumerations for tracker operations.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for tracker operations.
pub mod structs;

/// Type aliases for hashed collections.
pub mod types;
