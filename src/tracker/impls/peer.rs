use std::fmt;
use std::fmt::Formatter;
use std::net::IpAddr;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_id::PeerId;

impl Peer {
    pub fn new(ip: IpAddr, port: u16, peer_id: PeerId) -> Peer {
        Peer { ip, port, peer_id }
    }
}

impl fmt::Display for Peer {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{{ip: '{}', port: '{}', id: '{}'}}", self.ip, self.port, self.peer_id)
    }
}
