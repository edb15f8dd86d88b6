use std::fmt::Write as _;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use percent_encoding::percent_decode_str;
use crate::common::common::{escape_query_value, html_escape, parse_query};
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_registry::PeerRegistry;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_announce)));
        cfg.service(web::resource("/").route(web::get().to(http_service_list)));
        cfg.service(web::resource("/info/{hash}").route(web::get().to(http_service_info)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub async fn http_service(
    addr: SocketAddr,
    peer_registry: Arc<PeerRegistry>,
    http_server_object: HttpTrackersConfig
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    let keep_alive = http_server_object.keep_alive;
    let request_timeout = http_server_object.request_timeout;
    let disconnect_timeout = http_server_object.disconnect_timeout;
    let worker_threads = http_server_object.threads as usize;
    let max_connections = http_server_object.max_connections as usize;

    let service_data = Arc::new(HttpServiceData {
        peer_registry,
        http_trackers_config: Arc::new(http_server_object)
    });

    info!("[HTTP] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(http_service_cors())
            .configure(http_service_routes(service_data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(request_timeout))
        .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
        .max_connections(max_connections)
        .workers(worker_threads)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

/// `GET /announce`: registers the caller and answers with a bencoded peer list.
///
/// The status is always 200; a rejected request carries its reason as the
/// plain-text body.
pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let query_map = parse_query(Some(request.query_string().to_string()));
    let mut body: Vec<u8> = Vec::new();
    let _ = data.peer_registry.serve_announce(request.peer_addr(), &query_map, &mut body);

    HttpResponse::Ok().content_type(ContentType::plaintext()).body(body)
}

/// `GET /`: HTML listing of every known torrent.
pub async fn http_service_list(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let torrents = data.peer_registry.torrents();
    debug!("[HTTP] Listing {} torrents", torrents.len());
    HttpResponse::Ok().content_type(ContentType::html()).body(render_torrent_list(&torrents))
}

/// `GET /info/{hash}`: HTML listing of the peers of one torrent.
///
/// The hash is taken from the raw request path so that binary hashes survive;
/// it is decoded and re-escaped into the same form `/announce` stores.
pub async fn http_service_info(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let raw_hash = request.uri().path().strip_prefix("/info/").unwrap_or_default();
    let decoded: Vec<u8> = percent_decode_str(raw_hash).collect();
    let torrent_id = escape_query_value(&decoded);

    let peers = data.peer_registry.peers(&torrent_id);
    HttpResponse::Ok().content_type(ContentType::html()).body(render_peer_list(&torrent_id, &peers))
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    debug!("[HTTP {}] Request from {:?}: 404 Not Found ({})", data.http_trackers_config.bind_address, request.peer_addr(), request.path());
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body("unknown request")
}

pub fn render_torrent_list(torrents: &[String]) -> String
{
    let mut page = String::from("<!DOCTYPE html>\n<html><head><title>Torrents</title></head><body>\n<h1>Torrents</h1>\n<ul>\n");
    for torrent_id in torrents {
        let escaped = html_escape(torrent_id);
        let _ = writeln!(page, "<li><a href=\"/info/{escaped}\">{escaped}</a></li>");
    }
    page.push_str("</ul>\n</body></html>\n");
    page
}

pub fn render_peer_list(torrent_id: &str, peers: &[Peer]) -> String
{
    let escaped_id = html_escape(torrent_id);
    let mut page = format!("<!DOCTYPE html>\n<html><head><title>{escaped_id}</title></head><body>\n<h1>{escaped_id}</h1>\n<ul>\n");
    for peer in peers {
        let line = format!("{}:{} {}", peer.ip, peer.port, peer.peer_id);
        let _ = writeln!(page, "<li>{}</li>", html_escape(&line));
    }
    page.push_str("</ul>\n</body></html>\n");
    page
}
