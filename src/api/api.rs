use std::fs::File;
use std::future::Future;
use std::io::BufReader;
use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::thread::available_parallelism;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{http, web, App, Error, HttpRequest, HttpResponse, HttpServer};
use actix_web::dev::ServerHandle;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{error, info};
use serde_json::json;
use crate::api::api_challenges::api_service_challenge_register;
use crate::api::structs::api_service_data::ApiServiceData;

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["POST"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.app_data(web::JsonConfig::default().error_handler(|err: JsonPayloadError, _| Error::from(InternalError::from_response(err, HttpResponse::Ok().content_type(ContentType::plaintext()).body("json parse error")))));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("tls-alpn-01").route(web::post().to(api_service_challenge_register)));
        cfg.service(web::resource("tls-alpn-01/{hostname}").route(web::post().to(api_service_challenge_register)));
    })
}

pub async fn api_service(
    addr: SocketAddr,
    data: Arc<ApiServiceData>,
) -> (ServerHandle, impl Future<Output=Result<(), std::io::Error>>)
{
    let keep_alive = data.registration_config.keep_alive.unwrap_or(60);
    let client_request_timeout = data.registration_config.request_timeout.unwrap_or(30);
    let client_disconnect_timeout = data.registration_config.disconnect_timeout.unwrap_or(30);
    let threads = data.registration_config.threads.unwrap_or(available_parallelism().unwrap().get() as u64);

    if data.registration_config.ssl.unwrap_or(false) {
        info!("[REGISTRATION] Starting server listener with SSL on {}", addr);
        let ssl_cert = data.registration_config.ssl_cert.clone();
        let ssl_key = data.registration_config.ssl_key.clone();
        if ssl_cert.is_none() || ssl_key.is_none() {
            error!("[REGISTRATION] No SSL key or SSL certificate given, exiting...");
            exit(1);
        }

        let certs_file = &mut BufReader::new(File::open(ssl_cert.unwrap()).unwrap());
        let key_file = &mut BufReader::new(File::open(ssl_key.unwrap()).unwrap());

        let tls_certs = rustls_pemfile::certs(certs_file)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let tls_key = rustls_pemfile::pkcs8_private_keys(key_file)
            .next()
            .unwrap()
            .unwrap();

        let tls_config = rustls::ServerConfig::builder()
            .with_no_client_auth()
            .with_single_cert(tls_certs, rustls::pki_types::PrivateKeyDer::Pkcs8(tls_key))
            .unwrap();

        let server = HttpServer::new(move || {
            App::new()
                .wrap(api_service_cors())
                .configure(api_service_routes(data.clone()))
        })
            .keep_alive(Duration::from_secs(keep_alive))
            .client_request_timeout(Duration::from_secs(client_request_timeout))
            .client_disconnect_timeout(Duration::from_secs(client_disconnect_timeout))
            .workers(threads as usize)
            .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)
            .unwrap()
            .disable_signals()
            .run();

        return (server.handle(), server);
    }

    info!("[REGISTRATION] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(api_service_cors())
            .configure(api_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(client_request_timeout))
        .client_disconnect_timeout(Duration::from_secs(client_disconnect_timeout))
        .workers(threads as usize)
        .bind((addr.ip(), addr.port()))
        .unwrap()
        .disable_signals()
        .run();

    (server.handle(), server)
}

pub async fn api_service_not_found(_request: HttpRequest) -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}
