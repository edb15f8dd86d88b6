use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use swarm_tracker::common::common::{http_check_host_and_port_used, setup_logging};
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::http::http::http_service;
use swarm_tracker::structs::Cli;
use swarm_tracker::tracker::structs::peer_registry::PeerRegistry;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[BOOT] {error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let peer_registry = Arc::new(PeerRegistry::new(config.tracker_config));
            info!(
                "[BOOT] Tracker ready with interval {}s, numwant {} (max {})",
                config.tracker_config.interval,
                config.tracker_config.default_num_want,
                config.tracker_config.max_num_want
            );

            let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = shutdown_rx.changed() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();

            for http_server_object in &config.http_server {
                if http_server_object.enabled {
                    if let Err(error) = http_check_host_and_port_used(&http_server_object.bind_address) {
                        error!("[BOOT] {error}");
                        exit(1);
                    }
                    let address: SocketAddr = match http_server_object.bind_address.parse() {
                        Ok(address) => address,
                        Err(error) => {
                            error!("[BOOT] Invalid bind address {}: {error}", http_server_object.bind_address);
                            exit(1);
                        }
                    };

                    let (handle, future) = match http_service(
                        address,
                        peer_registry.clone(),
                        http_server_object.clone()
                    ).await {
                        Ok(server) => server,
                        Err(error) => {
                            sentry::capture_error(&error);
                            error!("[BOOT] Unable to bind {address}: {error}");
                            exit(1);
                        }
                    };

                    http_handles.push(handle);
                    http_futures.push(future);
                }
            }

            if http_futures.is_empty() {
                error!("[BOOT] No enabled http_server found in configuration, exiting...");
                exit(1);
            }

            let servers = tokio::spawn(async move {
                if let Err(error) = try_join_all(http_futures).await {
                    sentry::capture_error(&error);
                    error!("[HTTP] Server stopped with error: {error}");
                }
            });

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                }
                _ = servers => {
                    info!("HTTP servers stopped, shutting down...");
                }
            }

            let _ = shutdown_tx.send(true);
            for handle in http_handles {
                handle.stop(true).await;
            }

            info!(
                "Server shutting down completed ({} torrents in memory dropped)",
                peer_registry.torrents_amount()
            );
            Ok(())
        })
}
