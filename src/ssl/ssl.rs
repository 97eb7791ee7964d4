use log::{error, info};
use std::fs;
use std::process::exit;
use std::sync::Arc;
use crate::structs::Cli;
use crate::ssl::structs::acme_certificate_resolver::AcmeCertificateResolver;
use crate::ssl::structs::challenge_registry::ChallengeRegistry;

/// The ALPN protocol identifier reserved for the tls-alpn-01 challenge.
pub const ACME_TLS_ALPN_PROTOCOL: &[u8] = b"acme-tls/1";

pub fn create_challenge_registry() -> Arc<ChallengeRegistry> {
    Arc::new(ChallengeRegistry::new())
}

/// Builds the TLS server configuration for a responder listener.
///
/// The challenge protocol is advertised first so the TLS stack selects it
/// whenever a validation client offers it; the configured application
/// protocols follow, keeping ordinary `h2`/`http/1.1` negotiation intact on
/// the same port.
pub fn create_responder_tls_config(
    resolver: Arc<AcmeCertificateResolver>,
    extra_alpn_protocols: &[String],
) -> rustls::ServerConfig {
    let mut tls_config = rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_cert_resolver(resolver);
    tls_config.alpn_protocols.push(ACME_TLS_ALPN_PROTOCOL.to_vec());
    for protocol in extra_alpn_protocols {
        if protocol.as_bytes() != ACME_TLS_ALPN_PROTOCOL {
            tls_config.alpn_protocols.push(protocol.as_bytes().to_vec());
        }
    }
    tls_config
}

/// Generates a self-signed fallback key and certificate file, then exits.
pub fn cert_gen(args: &Cli)
{
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");

    // Set localhost and optional domain if given.
    let mut subject_alt_names = vec![
        String::from("localhost")
    ];
    if args.selfsigned_domain != String::from("localhost") {
        subject_alt_names.push(args.selfsigned_domain.clone());
    }

    // Generate X.509 key and cert file.
    let rcgen::CertifiedKey { cert, signing_key } = rcgen::generate_simple_self_signed(subject_alt_names).unwrap();

    // Write the key and cert file.
    match fs::write(args.selfsigned_keyfile.as_str(), signing_key.serialize_pem()) {
        Ok(_) => {
            info!("[CERTGEN] The key file {} has been generated", args.selfsigned_keyfile.as_str());
        }
        Err(error) => {
            error!("[CERTGEN] The key file {} could not be generated!", args.selfsigned_keyfile.as_str());
            panic!("[CERTGEN] {}", error.to_string())
        }
    }
    match fs::write(args.selfsigned_certfile.as_str(), cert.pem()) {
        Ok(_) => {
            info!("[CERTGEN] The cert file {} has been generated", args.selfsigned_certfile.as_str());
        }
        Err(error) => {
            error!("[CERTGEN] The cert file {} could not be generated!", args.selfsigned_certfile.as_str());
            panic!("[CERTGEN] {}", error.to_string())
        }
    }

    info!("[CERTGEN] The files {} and {} has been generated, use them only for development reasons", args.selfsigned_keyfile.as_str(), args.selfsigned_certfile.as_str());
    exit(0)
}
