//! Sharded in-memory peer registry.

use std::sync::Arc;
use parking_lot::RwLock;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::tracker::structs::torrent_peer_set::TorrentPeerSet;
use crate::tracker::types::ahash_map::AHashMap;

pub const SHARD_COUNT: usize = 256;

pub type PeerSetHandle = Arc<RwLock<TorrentPeerSet>>;
pub type PeerRegistryShard = RwLock<AHashMap<String, PeerSetHandle>>;

/// Store mapping torrent identifiers to the peers announced for them.
///
/// Torrent identifiers are spread over [`SHARD_COUNT`] shards by hashing the
/// identifier. A shard only maps identifiers to peer-set handles; every
/// peer-set carries its own lock.
///
/// # Locking
///
/// - A shard lock is taken to look up or create a peer-set handle and is
///   dropped before the peer-set is locked.
/// - Registering takes the peer-set write lock, sampling takes its read lock.
/// - Operations on different torrents only meet on the (short) shard lookup.
///
/// The registry never forgets peers: there is no expiry, so peer-sets only
/// grow for the lifetime of the process.
pub struct PeerRegistry {
    pub(crate) config: TrackerConfig,
    pub(crate) shards: [PeerRegistryShard; SHARD_COUNT],
    pub(crate) shard_hasher: ahash::RandomState,
}
