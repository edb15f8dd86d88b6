use std::sync::Arc;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::tracker::structs::peer_registry::PeerRegistry;

#[derive(Debug)]
pub struct HttpServiceData {
    pub peer_registry: Arc<PeerRegistry>,
    pub http_trackers_config: Arc<HttpTrackersConfig>
}
