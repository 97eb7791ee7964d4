use actix_web::http::header::ContentType;
use actix_web::web::Data;
use actix_web::{
    web,
    HttpRequest,
    HttpResponse
};
use log::{debug, error, info};
use std::sync::Arc;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::challenge_upload::ChallengeUpload;
use crate::config::enums::hostname_source::HostnameSource;
use crate::ssl::structs::challenge_certificate::ChallengeCertificate;

#[tracing::instrument(level = "debug")]
pub async fn api_service_challenge_register(
    request: HttpRequest,
    data: Data<Arc<ApiServiceData>>,
    payload: web::Json<ChallengeUpload>,
) -> HttpResponse {
    let hostname = match extract_hostname(&request, data.registration_config.hostname_source) {
        Some(hostname) => hostname,
        None => {
            error!("[REGISTRATION] Registration request without a target hostname");
            return HttpResponse::BadRequest().content_type(ContentType::plaintext()).body("missing hostname");
        }
    };

    info!("[REGISTRATION] Setup tls-alpn-01 for {}", hostname);

    let challenge = match ChallengeCertificate::from_base64(&payload.cert, &payload.key) {
        Ok(challenge) => challenge,
        Err(error) => {
            // A bad payload is dropped without touching the registry; the
            // hostname simply stays unarmed.
            error!("[REGISTRATION] Rejected challenge certificate for {}: {}", hostname, error);
            return HttpResponse::Ok().content_type(ContentType::plaintext()).body(format!("rejected: {}", error));
        }
    };

    data.challenge_registry.put(&hostname, challenge);
    debug!("[REGISTRATION] Challenge certificate for {} is now armed", hostname);

    HttpResponse::Ok().content_type(ContentType::plaintext()).body(hostname)
}

/// Determines the target hostname for a registration request.
///
/// The URL path variant reads the `{hostname}` segment; the Host header
/// variant strips a trailing port, since SNI values never carry one.
pub fn extract_hostname(request: &HttpRequest, source: HostnameSource) -> Option<String> {
    match source {
        HostnameSource::url_path => {
            match request.match_info().get("hostname") {
                Some(hostname) if !hostname.is_empty() => Some(hostname.to_string()),
                _ => None
            }
        }
        HostnameSource::host_header => {
            let connection_info = request.connection_info();
            let host = connection_info.host();
            let hostname = match host.rsplit_once(':') {
                Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
                _ => host,
            };
            if hostname.is_empty() {
                return None;
            }
            Some(hostname.to_string())
        }
    }
}
