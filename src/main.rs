use std::mem;
use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use alpn_responder::api::api::api_service;
use alpn_responder::api::structs::api_service_data::ApiServiceData;
use alpn_responder::common::common::{setup_logging, tcp_check_host_and_port_used};
use alpn_responder::config::structs::configuration::Configuration;
use alpn_responder::responder::responder::responder_service;
use alpn_responder::responder::structs::log_challenge_handler::LogChallengeHandler;
use alpn_responder::responder::structs::responder_service_data::ResponderServiceData;
use alpn_responder::ssl::ssl::{cert_gen, create_challenge_registry, create_responder_tls_config};
use alpn_responder::ssl::structs::acme_certificate_resolver::AcmeCertificateResolver;
use alpn_responder::ssl::structs::fallback_certificate::FallbackCertificate;
use alpn_responder::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            if args.create_selfsigned { cert_gen(&args); }

            let challenge_registry = create_challenge_registry();

            let fallback = match FallbackCertificate::from_config(&config.fallback) {
                Ok(fallback) => Arc::new(fallback),
                Err(error) => {
                    error!("[BOOT] Unable to build the fallback identity: {}", error);
                    exit(101);
                }
            };
            info!("[BOOT] Fallback identity ready ({})", fallback.origin);

            let tokio_core = Builder::new_multi_thread().thread_name("core").worker_threads(9).enable_all().build()?;
            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let deadlocks_handler = tokio_shutdown.clone();
            tokio_core.spawn(async move {
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
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let mut registration_futures = Vec::new();

            for registration_server_object in &config.registration_server {
                if registration_server_object.enabled {
                    tcp_check_host_and_port_used(registration_server_object.bind_address.clone());
                    let address: SocketAddr = registration_server_object.bind_address.parse().unwrap();

                    let service_data = Arc::new(ApiServiceData {
                        challenge_registry: challenge_registry.clone(),
                        registration_config: Arc::new(registration_server_object.clone()),
                    });

                    let (handle, future) = api_service(address, service_data).await;
                    registration_futures.push((handle, future));
                }
            }

            if !registration_futures.is_empty() {
                let (handles, futures): (Vec<_>, Vec<_>) = registration_futures.into_iter().unzip();
                tokio_core.spawn(async move {
                    let _ = try_join_all(futures).await;
                    drop(handles);
                });
            }

            let mut responder_futures = Vec::new();

            for responder_server_object in &config.responder_server {
                if responder_server_object.enabled {
                    tcp_check_host_and_port_used(responder_server_object.bind_address.clone());
                    let address: SocketAddr = responder_server_object.bind_address.parse().unwrap();

                    let resolver = Arc::new(AcmeCertificateResolver::new(
                        challenge_registry.clone(),
                        fallback.clone()
                    ));
                    let tls_config = Arc::new(create_responder_tls_config(
                        resolver,
                        &responder_server_object.alpn_protocols
                    ));
                    let service_data = Arc::new(ResponderServiceData {
                        responder_config: Arc::new(responder_server_object.clone()),
                        tls_config,
                        challenge_handler: Arc::new(LogChallengeHandler),
                    });

                    responder_futures.push(responder_service(address, service_data, tokio_shutdown.clone()));
                }
            }

            if !responder_futures.is_empty() {
                tokio_core.spawn(async move {
                    let _ = try_join_all(responder_futures).await;
                });
            }

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");

                    tokio_shutdown.handle().await;
                    tokio::time::sleep(Duration::from_secs(1)).await;

                    info!("Server shutting down completed");

                    mem::forget(tokio_core);
                    Ok(())
                }
            }
        })
}
