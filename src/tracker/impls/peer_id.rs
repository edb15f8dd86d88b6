use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl PeerId {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for PeerId {
    fn from(data: &[u8]) -> PeerId {
        PeerId(data.to_vec())
    }
}

impl From<Vec<u8>> for PeerId {
    fn from(data: Vec<u8>) -> PeerId {
        PeerId(data)
    }
}

impl From<&str> for PeerId {
    fn from(data: &str) -> PeerId {
        PeerId(data.as_bytes().to_vec())
    }
}
