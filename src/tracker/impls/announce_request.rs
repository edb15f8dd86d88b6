use std::collections::HashMap;
use std::net::SocketAddr;
use std::str::FromStr;
use crate::common::common::{escape_query_value, query_first};
use crate::tracker::enums::announce_error::AnnounceError;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_id::PeerId;

impl AnnounceRequest {
    /// Extracts an announce from the connection's source address and the
    /// decoded query fields.
    ///
    /// The peer address is always taken from `remote_addr`; an `ip` query
    /// field is ignored. Fields are checked in the order source address,
    /// `port`, `peer_id`, `info_hash`, and the first failure is returned.
    /// `numwant` never fails: a value that does not parse is dropped.
    #[tracing::instrument(level = "debug", skip(query))]
    pub fn validate(remote_addr: Option<SocketAddr>, query: &HashMap<String, Vec<Vec<u8>>>) -> Result<AnnounceRequest, AnnounceError>
    {
        fn parse_integer<T: FromStr>(value: Option<&[u8]>) -> Option<T> {
            value
                .and_then(|bytes| std::str::from_utf8(bytes).ok())
                .and_then(|text| text.parse::<T>().ok())
        }

        let remote_addr = remote_addr.ok_or(AnnounceError::MalformedSourceAddress)?;

        let port = parse_integer::<u16>(query_first(query, "port"))
            .filter(|port| *port != 0)
            .ok_or(AnnounceError::MissingPort)?;

        let peer_id = query_first(query, "peer_id")
            .filter(|peer_id| !peer_id.is_empty())
            .ok_or(AnnounceError::MissingPeerId)?;

        let info_hash = escape_query_value(query_first(query, "info_hash").unwrap_or_default());
        if info_hash.is_empty() {
            return Err(AnnounceError::MissingInfoHash);
        }

        let numwant = parse_integer::<i64>(query_first(query, "numwant"));

        Ok(AnnounceRequest {
            peer: Peer::new(remote_addr.ip().to_canonical(), port, PeerId::from(peer_id)),
            info_hash,
            numwant,
        })
    }
}
