mod common;

use std::sync::Arc;
use actix_web::{test, App};
use actix_web::http::StatusCode;
use swarm_tracker::common::common::escape_query_value;
use swarm_tracker::http::http::{http_service_cors, http_service_routes};
use swarm_tracker::http::structs::http_service_data::HttpServiceData;

macro_rules! init_app {
    ($data:expr) => {
        test::init_service(
            App::new()
                .wrap(http_service_cors())
                .configure(http_service_routes($data)),
        )
        .await
    };
}

fn announce_request(query: &str, last_octet: u8, port: u16) -> test::TestRequest {
    test::TestRequest::get()
        .uri(&format!("/announce?{query}"))
        .peer_addr(common::remote_addr(last_octet, port))
}

fn data() -> Arc<HttpServiceData> {
    common::create_test_http_data(common::create_test_registry())
}

#[actix_web::test]
async fn test_first_announce_returns_empty_peer_list() {
    let app = init_app!(data());

    let query = common::announce_query(b"abcdeabcdeabcdeabcde", b"01234567890123456789", 2048, None);
    let resp = test::call_service(&app, announce_request(&query, 1, 40000).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"d8:intervali1800e5:peerslee");
}

#[actix_web::test]
async fn test_second_peer_sees_first_peer() {
    let app = init_app!(data());
    let info_hash = common::random_info_hash();
    let peer_a = common::random_peer_id();
    let peer_b = common::random_peer_id();

    let query = common::announce_query(&info_hash, &peer_a, 6881, None);
    test::call_service(&app, announce_request(&query, 1, 40000).to_request()).await;

    let query = common::announce_query(&info_hash, &peer_b, 6882, None);
    let body = test::call_and_read_body(&app, announce_request(&query, 2, 40001).to_request()).await;
    let decoded = common::decode_announce(&body);

    assert_eq!(decoded.interval, 1800);
    assert_eq!(decoded.peers, vec![(String::from("127.0.0.1"), 6881, peer_a.to_vec())]);
}

#[actix_web::test]
async fn test_torrents_do_not_cross_contaminate() {
    let peer_registry = common::create_test_registry();
    let app = init_app!(common::create_test_http_data(peer_registry.clone()));
    let hash_h = common::random_info_hash();
    let hash_g = common::random_info_hash();
    let peer_a = common::random_peer_id();

    let query = common::announce_query(&hash_h, &peer_a, 6881, None);
    test::call_service(&app, announce_request(&query, 1, 40000).to_request()).await;

    let query = common::announce_query(&hash_g, &peer_a, 6881, None);
    let body = test::call_and_read_body(&app, announce_request(&query, 1, 40000).to_request()).await;
    assert!(common::decode_announce(&body).peers.is_empty());

    assert_eq!(peer_registry.peers_amount(&escape_query_value(&hash_h)), 1);
    assert_eq!(peer_registry.peers_amount(&escape_query_value(&hash_g)), 1);
}

#[actix_web::test]
async fn test_numwant_limits_returned_peers() {
    let peer_registry = common::create_test_registry();
    let app = init_app!(common::create_test_http_data(peer_registry.clone()));
    let info_hash = common::random_info_hash();

    for index in 0..100u16 {
        let query = common::announce_query(&info_hash, format!("peer-{index:015}").as_bytes(), 6000 + index, None);
        test::call_service(&app, announce_request(&query, 1, 40000).to_request()).await;
    }
    assert_eq!(peer_registry.peers_amount(&escape_query_value(&info_hash)), 100);

    let requester = common::random_peer_id();
    let query = common::announce_query(&info_hash, &requester, 7000, Some(20));
    let body = test::call_and_read_body(&app, announce_request(&query, 1, 40000).to_request()).await;
    let decoded = common::decode_announce(&body);

    assert_eq!(decoded.peers.len(), 20);
    let mut distinct = decoded.peers.clone();
    distinct.sort();
    distinct.dedup();
    assert_eq!(distinct.len(), 20);
    assert!(decoded.peers.iter().all(|(_, port, id)| *port != 7000 && id != &requester.to_vec()));
}

#[actix_web::test]
async fn test_missing_port_leaves_registry_untouched() {
    let peer_registry = common::create_test_registry();
    let app = init_app!(common::create_test_http_data(peer_registry.clone()));
    let info_hash = common::random_info_hash();

    let query = format!(
        "info_hash={}&peer_id={}",
        escape_query_value(&info_hash),
        escape_query_value(&common::random_peer_id())
    );
    let resp = test::call_service(&app, announce_request(&query, 1, 40000).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"port is missing from request");
    assert_eq!(peer_registry.torrents_amount(), 0);

    let query = common::announce_query(&info_hash, &common::random_peer_id(), 6881, None);
    let body = test::call_and_read_body(&app, announce_request(&query, 2, 40001).to_request()).await;
    assert!(common::decode_announce(&body).peers.is_empty());
}

#[actix_web::test]
async fn test_missing_fields_report_reason() {
    let app = init_app!(data());

    let body = test::call_and_read_body(&app, announce_request("info_hash=abc&port=1", 1, 40000).to_request()).await;
    assert_eq!(&body[..], b"peer_id is missing from request");

    let body = test::call_and_read_body(&app, announce_request("peer_id=abc&port=1", 1, 40000).to_request()).await;
    assert_eq!(&body[..], b"info_hash is missing from request");
}

#[actix_web::test]
async fn test_client_supplied_ip_is_ignored() {
    let app = init_app!(data());
    let info_hash = common::random_info_hash();

    let query = format!("{}&ip=8.8.8.8", common::announce_query(&info_hash, b"first", 6881, None));
    test::call_service(&app, announce_request(&query, 9, 40000).to_request()).await;

    let query = common::announce_query(&info_hash, b"second", 6881, None);
    let body = test::call_and_read_body(&app, announce_request(&query, 1, 40000).to_request()).await;
    let decoded = common::decode_announce(&body);
    assert_eq!(decoded.peers, vec![(String::from("127.0.0.9"), 6881, b"first".to_vec())]);
}

#[actix_web::test]
async fn test_torrent_list_and_info_pages() {
    let app = init_app!(data());
    let info_hash = [0x12u8, 0x34, 0xab, b'z'];

    let query = common::announce_query(&info_hash, b"<peer>", 6881, None);
    test::call_service(&app, announce_request(&query, 1, 40000).to_request()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(page.contains("%124%ABz"));

    let req = test::TestRequest::get().uri("/info/%124%ABz").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(page.contains("127.0.0.1:6881 &lt;peer&gt;"));
}

#[actix_web::test]
async fn test_info_page_for_unknown_torrent_is_empty() {
    let app = init_app!(data());

    let req = test::TestRequest::get().uri("/info/unknown").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(page.contains("<ul>\n</ul>"));
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let app = init_app!(data());

    let req = test::TestRequest::get().uri("/scrape").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_http_cors_headers() {
    let app = init_app!(data());

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header(("Origin", "http://example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "*");
}
