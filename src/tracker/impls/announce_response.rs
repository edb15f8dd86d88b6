use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map, BMutAccess};
use crate::tracker::enums::announce_error::AnnounceError;
use crate::tracker::structs::announce_response::AnnounceResponse;

impl AnnounceResponse {
    /// Bencodes the response as `{ interval, peers: [{ id, ip, port }, ..] }`.
    ///
    /// With no peers and an interval of 1800 this is exactly
    /// `d8:intervali1800e5:peerslee`.
    pub fn encode(&self) -> Result<Vec<u8>, AnnounceError>
    {
        let interval = i64::try_from(self.interval).map_err(|_| {
            AnnounceError::SerializationFailure(format!("interval {} does not fit a bencode integer", self.interval))
        })?;

        let mut peers_list = ben_list!();
        let Some(peers_list_mut) = peers_list.list_mut() else {
            return Err(AnnounceError::SerializationFailure(String::from("peers is not a list")));
        };
        for peer in self.peers.iter() {
            peers_list_mut.push(ben_map! {
                "ip" => ben_bytes!(peer.ip.to_string()),
                "port" => ben_int!(peer.port as i64),
                "id" => ben_bytes!(peer.peer_id.as_bytes())
            });
        }

        Ok(ben_map! {
            "interval" => ben_int!(interval),
            "peers" => peers_list
        }.encode())
    }
}
