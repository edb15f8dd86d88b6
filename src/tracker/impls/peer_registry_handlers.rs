use std::collections::HashMap;
use std::io::Write;
use std::net::SocketAddr;
use log::{debug, error, warn};
use crate::tracker::enums::announce_error::AnnounceError;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::announce_response::AnnounceResponse;
use crate::tracker::structs::peer_registry::PeerRegistry;

impl PeerRegistry {
    /// Registers the announcing peer and samples the peers to hand back.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_announce(&self, announce: &AnnounceRequest) -> AnnounceResponse
    {
        debug!("[HANDLE ANNOUNCE] Adding to infohash {} peer {}", announce.info_hash, announce.peer);
        self.register(&announce.info_hash, announce.peer.clone());

        let want = self.resolve_num_want(announce.numwant);
        let peers = self.sample(&announce.info_hash, &announce.peer, want);
        debug!("[HANDLE ANNOUNCE] Returning {} peers for infohash {}", peers.len(), announce.info_hash);

        AnnounceResponse {
            interval: self.interval(),
            peers
        }
    }

    /// Serves one announce end to end and writes the reply body to `out`.
    ///
    /// On a malformed request the error text is written instead of a bencoded
    /// body and the registry is left untouched. Every failure is logged here;
    /// the returned error is informational for the caller.
    pub fn serve_announce<W: Write>(&self, remote_addr: Option<SocketAddr>, query: &HashMap<String, Vec<Vec<u8>>>, out: &mut W) -> Result<AnnounceResponse, AnnounceError>
    {
        let announce = match AnnounceRequest::validate(remote_addr, query) {
            Ok(announce) => announce,
            Err(announce_error) => {
                Self::log_and_fail(&announce_error, out);
                return Err(announce_error);
            }
        };

        let response = self.handle_announce(&announce);
        let body = match response.encode() {
            Ok(body) => body,
            Err(announce_error) => {
                Self::log_and_fail(&announce_error, out);
                return Err(announce_error);
            }
        };

        if let Err(write_error) = out.write_all(&body) {
            let announce_error = AnnounceError::WriteFailure(write_error.to_string());
            error!("[ANNOUNCE] Failed to write response due to: '{announce_error}'");
            return Err(announce_error);
        }
        Ok(response)
    }

    fn log_and_fail<W: Write>(announce_error: &AnnounceError, out: &mut W)
    {
        if announce_error.is_request_error() {
            warn!("[ANNOUNCE] Rejected request, replied with reason '{announce_error}'");
        } else {
            error!("[ANNOUNCE] Tracker failed, replied with reason '{announce_error}'");
        }
        if let Err(write_error) = out.write_all(announce_error.to_string().as_bytes()) {
            error!("[ANNOUNCE] Failed to write failure reason: '{write_error}'");
        }
    }
}
