use std::net::IpAddr;
use crate::tracker::structs::peer_id::PeerId;

/// One client instance taking part in a swarm.
///
/// Two peers are the same peer only if address, port and peer id all match;
/// this triple is the key inside a torrent's peer-set.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct Peer {
    pub ip: IpAddr,
    pub port: u16,
    pub peer_id: PeerId,
}
