use std::fmt;
use std::hash::BuildHasher;
use std::sync::Arc;
use log::debug;
use parking_lot::RwLock;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_registry::{PeerRegistry, PeerRegistryShard, PeerSetHandle, SHARD_COUNT};
use crate::tracker::structs::torrent_peer_set::TorrentPeerSet;
use crate::tracker::types::ahash_map::AHashMap;

impl Default for PeerRegistry {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl fmt::Debug for PeerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeerRegistry")
            .field("config", &self.config)
            .field("torrents", &self.torrents_amount())
            .finish()
    }
}

impl PeerRegistry {
    pub fn new(config: TrackerConfig) -> PeerRegistry {
        PeerRegistry {
            config,
            shards: std::array::from_fn(|_| RwLock::new(AHashMap::default())),
            shard_hasher: ahash::RandomState::new(),
        }
    }

    pub fn interval(&self) -> u64 {
        self.config.interval
    }

    #[inline]
    pub fn get_shard(&self, torrent_id: &str) -> &PeerRegistryShard {
        let index = BuildHasher::hash_one(&self.shard_hasher, torrent_id) as usize % SHARD_COUNT;
        &self.shards[index]
    }

    /// Looks up the peer-set handle for `torrent_id`. The shard lock is
    /// released on return.
    pub fn get_peer_set(&self, torrent_id: &str) -> Option<PeerSetHandle> {
        self.get_shard(torrent_id).read().get(torrent_id).cloned()
    }

    /// Looks up the peer-set handle for `torrent_id`, creating an empty set
    /// when the torrent has not been seen before.
    pub fn get_or_create_peer_set(&self, torrent_id: &str) -> PeerSetHandle {
        let shard = self.get_shard(torrent_id);
        if let Some(peer_set) = shard.read().get(torrent_id) {
            return peer_set.clone();
        }

        let mut lock = shard.write();
        lock.entry(torrent_id.to_string())
            .or_insert_with(|| {
                debug!("[REGISTRY] New torrent {torrent_id}");
                Arc::new(RwLock::new(TorrentPeerSet::new()))
            })
            .clone()
    }

    /// Records `peer` as interested in `torrent_id`.
    ///
    /// Registering a peer that is already present changes nothing; the return
    /// value tells whether the peer was new.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn register(&self, torrent_id: &str, peer: Peer) -> bool
    {
        let peer_set = self.get_or_create_peer_set(torrent_id);
        let inserted = peer_set.write().insert(peer);
        inserted
    }

    /// Resolves the number of peers to hand out for a request.
    ///
    /// Uses the client's `numwant` when given (negative values count as not
    /// given), otherwise `default_num_want`, and never more than
    /// `max_num_want`.
    pub fn resolve_num_want(&self, numwant: Option<i64>) -> usize
    {
        let wanted = match numwant {
            Some(numwant) if numwant >= 0 => numwant as u64,
            _ => self.config.default_num_want
        };
        wanted.min(self.config.max_num_want) as usize
    }

    /// Returns up to `want` peers registered for `torrent_id`, never
    /// including `requester`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn sample(&self, torrent_id: &str, requester: &Peer, want: usize) -> Vec<Peer>
    {
        if want == 0 {
            return Vec::new();
        }
        match self.get_peer_set(torrent_id) {
            None => Vec::new(),
            Some(peer_set) => peer_set.read().sample(requester, want)
        }
    }

    /// All known torrent identifiers, sorted.
    pub fn torrents(&self) -> Vec<String>
    {
        let mut torrents: Vec<String> = Vec::new();
        for shard in self.shards.iter() {
            torrents.extend(shard.read().keys().cloned());
        }
        torrents.sort();
        torrents
    }

    /// All peers registered for `torrent_id`, sorted; empty for unknown torrents.
    pub fn peers(&self, torrent_id: &str) -> Vec<Peer>
    {
        match self.get_peer_set(torrent_id) {
            None => Vec::new(),
            Some(peer_set) => peer_set.read().snapshot()
        }
    }

    pub fn contains_torrent(&self, torrent_id: &str) -> bool
    {
        self.get_shard(torrent_id).read().contains_key(torrent_id)
    }

    pub fn torrents_amount(&self) -> usize
    {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }

    pub fn peers_amount(&self, torrent_id: &str) -> usize
    {
        match self.get_peer_set(torrent_id) {
            None => 0,
            Some(peer_set) => peer_set.read().len()
        }
    }
}
