use rand::seq::SliceRandom;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::torrent_peer_set::TorrentPeerSet;
use crate::tracker::types::ahash_map::AHashSet;

impl TorrentPeerSet {
    pub fn new() -> TorrentPeerSet {
        TorrentPeerSet {
            peers: AHashSet::default()
        }
    }

    /// Adds `peer`, returning `false` when it was already present.
    pub fn insert(&mut self, peer: Peer) -> bool {
        self.peers.insert(peer)
    }

    pub fn contains(&self, peer: &Peer) -> bool {
        self.peers.contains(peer)
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    /// Picks up to `amount` distinct peers other than `requester`.
    ///
    /// Eligible peers are collected first and a uniformly random subset is
    /// drawn from them, so which peers come back (and their order) changes
    /// between calls once there are more eligible peers than `amount`.
    pub fn sample(&self, requester: &Peer, amount: usize) -> Vec<Peer> {
        if amount == 0 {
            return Vec::new();
        }

        let mut eligible: Vec<&Peer> = self.peers.iter()
            .filter(|peer| *peer != requester)
            .collect();

        if eligible.len() <= amount {
            eligible.shuffle(&mut rand::rng());
            return eligible.into_iter().cloned().collect();
        }

        let (chosen, _) = eligible.partial_shuffle(&mut rand::rng(), amount);
        chosen.iter().map(|peer| (*peer).clone()).collect()
    }

    /// All peers, sorted by address, port and peer id.
    pub fn snapshot(&self) -> Vec<Peer> {
        let mut peers: Vec<Peer> = self.peers.iter().cloned().collect();
        peers.sort();
        peers
    }
}
