use crate::tracker::structs::peer::Peer;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnounceResponse {
    pub interval: u64,
    pub peers: Vec<Peer>,
}
