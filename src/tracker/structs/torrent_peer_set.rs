use crate::tracker::structs::peer::Peer;
use crate::tracker::types::ahash_map::AHashSet;

#[derive(Clone, Debug, Default)]
pub struct TorrentPeerSet {
    pub(crate) peers: AHashSet<Peer>,
}
