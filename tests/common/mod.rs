#![allow(dead_code)]
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use bip_bencode::{BDecodeOpt, BRefAccess, BencodeRef};
use rand::RngExt;
use tempfile::TempDir;
use swarm_tracker::common::common::escape_query_value;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::config::structs::http_trackers_config::HttpTrackersConfig;
use swarm_tracker::config::structs::tracker_config::TrackerConfig;
use swarm_tracker::http::structs::http_service_data::HttpServiceData;
use swarm_tracker::tracker::structs::peer::Peer;
use swarm_tracker::tracker::structs::peer_id::PeerId;
use swarm_tracker::tracker::structs::peer_registry::PeerRegistry;

pub type TestRegistry = Arc<PeerRegistry>;

/// A decoded announce reply: the interval and `(ip, port, peer id)` triples.
#[derive(Debug)]
pub struct DecodedAnnounce {
    pub interval: i64,
    pub peers: Vec<(String, i64, Vec<u8>)>,
}

pub fn create_test_config() -> Configuration {
    Configuration::init()
}

pub fn create_test_http_config() -> Arc<HttpTrackersConfig> {
    Arc::new(HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:8080".to_string(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        max_connections: 1000,
        threads: 4,
    })
}

pub fn create_test_registry() -> TestRegistry {
    Arc::new(PeerRegistry::new(create_test_config().tracker_config))
}

pub fn create_test_registry_with(interval: u64, default_num_want: u64, max_num_want: u64) -> TestRegistry {
    Arc::new(PeerRegistry::new(TrackerConfig { interval, default_num_want, max_num_want }))
}

pub fn create_test_http_data(peer_registry: TestRegistry) -> Arc<HttpServiceData> {
    Arc::new(HttpServiceData {
        peer_registry,
        http_trackers_config: create_test_http_config(),
    })
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> [u8; 20] {
    let mut rng = rand::rng();
    rng.random()
}

pub fn random_peer_id() -> [u8; 20] {
    let mut rng = rand::rng();
    rng.random()
}

pub fn create_test_peer(index: u16) -> Peer {
    Peer::new(
        IpAddr::V4(Ipv4Addr::new(10, 0, (index >> 8) as u8, index as u8)),
        6881,
        PeerId::from(format!("-TT0001-{index:012}").as_str())
    )
}

pub fn remote_addr(last_octet: u8, port: u16) -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, last_octet)), port)
}

/// Builds an announce query string with percent-escaped binary fields.
pub fn announce_query(info_hash: &[u8], peer_id: &[u8], port: u16, numwant: Option<i64>) -> String {
    let mut query = format!(
        "info_hash={}&peer_id={}&port={port}&uploaded=0&downloaded=0&left=0",
        escape_query_value(info_hash),
        escape_query_value(peer_id)
    );
    if let Some(numwant) = numwant {
        query.push_str(&format!("&numwant={numwant}"));
    }
    query
}

pub fn decode_announce(body: &[u8]) -> DecodedAnnounce {
    let bencode = BencodeRef::decode(body, BDecodeOpt::default()).expect("body should be valid bencode");
    let dict = bencode.dict().expect("top level should be a dictionary");
    let interval = dict.lookup(b"interval").and_then(|value| value.int()).expect("interval should be an integer");
    let list = dict.lookup(b"peers").and_then(|value| value.list()).expect("peers should be a list");

    let mut peers = Vec::new();
    for index in 0..list.len() {
        let entry = list.get(index).and_then(|value| value.dict()).expect("peer should be a dictionary");
        let ip = entry.lookup(b"ip").and_then(|value| value.str()).expect("ip should be a string");
        let port = entry.lookup(b"port").and_then(|value| value.int()).expect("port should be an integer");
        let id = entry.lookup(b"id").and_then(|value| value.bytes()).expect("id should be bytes");
        peers.push((ip.to_string(), port, id.to_vec()));
    }

    DecodedAnnounce { interval, peers }
}
