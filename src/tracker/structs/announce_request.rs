use crate::tracker::structs::peer::Peer;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnounceRequest {
    pub peer: Peer,
    /// Percent-escaped `info_hash`, used as the registry key.
    pub info_hash: String,
    pub numwant: Option<i64>,
}
