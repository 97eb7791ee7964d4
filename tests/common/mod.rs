#![allow(dead_code)]
use base64::prelude::*;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{DigitallySignedStruct, SignatureScheme};
use std::sync::Arc;
use alpn_responder::api::structs::api_service_data::ApiServiceData;
use alpn_responder::config::enums::hostname_source::HostnameSource;
use alpn_responder::config::structs::registration_config::RegistrationConfig;
use alpn_responder::ssl::ssl::create_challenge_registry;
use alpn_responder::ssl::structs::challenge_certificate::ChallengeCertificate;
use alpn_responder::ssl::structs::challenge_registry::ChallengeRegistry;

pub type TestRegistry = Arc<ChallengeRegistry>;

/// Generates a DER certificate and PKCS#8 DER key for one domain.
pub fn generate_challenge_material(domain: &str) -> (Vec<u8>, Vec<u8>) {
    let rcgen::CertifiedKey { cert, signing_key } =
        rcgen::generate_simple_self_signed(vec![domain.to_string()]).unwrap();
    (cert.der().to_vec(), signing_key.serialize_der())
}

/// Same material, base64-encoded the way the registration endpoint expects it.
pub fn generate_challenge_upload(domain: &str) -> (String, String, Vec<u8>) {
    let (cert_der, key_der) = generate_challenge_material(domain);
    (
        BASE64_STANDARD.encode(&cert_der),
        BASE64_STANDARD.encode(&key_der),
        cert_der,
    )
}

pub fn create_test_registry() -> TestRegistry {
    create_challenge_registry()
}

pub fn register_challenge(registry: &ChallengeRegistry, domain: &str) -> Vec<u8> {
    let (cert_der, key_der) = generate_challenge_material(domain);
    registry.put(domain, ChallengeCertificate::from_der(cert_der.clone(), key_der).unwrap());
    cert_der
}

pub fn create_test_registration_config(hostname_source: HostnameSource) -> Arc<RegistrationConfig> {
    Arc::new(RegistrationConfig {
        enabled: true,
        bind_address: "127.0.0.1:8080".to_string(),
        hostname_source,
        keep_alive: Some(5),
        request_timeout: Some(10),
        disconnect_timeout: Some(5),
        threads: Some(2),
        ssl: Some(false),
        ssl_key: Some(String::new()),
        ssl_cert: Some(String::new()),
    })
}

pub fn create_test_api_service_data(
    registry: TestRegistry,
    hostname_source: HostnameSource,
) -> Arc<ApiServiceData> {
    Arc::new(ApiServiceData {
        challenge_registry: registry,
        registration_config: create_test_registration_config(hostname_source),
    })
}

/// Certificate verifier that accepts whatever the responder presents.
///
/// The responder intentionally serves identities a real client would reject
/// (the fallback for unknown hostnames), so the test client only checks which
/// certificate arrived, not whether it verifies.
#[derive(Debug)]
pub struct AcceptAnyServerCert(CryptoProvider);

impl AcceptAnyServerCert {
    pub fn new() -> AcceptAnyServerCert {
        AcceptAnyServerCert(rustls::crypto::ring::default_provider())
    }
}

impl ServerCertVerifier for AcceptAnyServerCert {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls12_signature(
            message,
            cert,
            dss,
            &self.0.signature_verification_algorithms,
        )
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls13_signature(
            message,
            cert,
            dss,
            &self.0.signature_verification_algorithms,
        )
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.0.signature_verification_algorithms.supported_schemes()
    }
}

/// Builds a client configuration advertising the given ALPN protocols.
pub fn create_test_client_config(alpn_protocols: Vec<Vec<u8>>) -> rustls::ClientConfig {
    let mut client_config = rustls::ClientConfig::builder()
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(AcceptAnyServerCert::new()))
        .with_no_client_auth();
    client_config.alpn_protocols = alpn_protocols;
    client_config
}

/// Runs a complete client/server handshake in memory and returns both ends.
pub fn complete_handshake(
    server_config: Arc<rustls::ServerConfig>,
    sni: &str,
    alpn_protocols: Vec<Vec<u8>>,
) -> (rustls::ClientConnection, rustls::ServerConnection) {
    let client_config = create_test_client_config(alpn_protocols);
    let server_name = ServerName::try_from(sni.to_string()).unwrap();
    let mut client = rustls::ClientConnection::new(Arc::new(client_config), server_name).unwrap();
    let mut server = rustls::ServerConnection::new(server_config).unwrap();

    while client.is_handshaking() || server.is_handshaking() {
        let mut client_to_server = Vec::new();
        client.write_tls(&mut client_to_server).unwrap();
        if !client_to_server.is_empty() {
            let mut buffer: &[u8] = &client_to_server;
            server.read_tls(&mut buffer).unwrap();
            server.process_new_packets().unwrap();
        }

        let mut server_to_client = Vec::new();
        server.write_tls(&mut server_to_client).unwrap();
        if !server_to_client.is_empty() {
            let mut buffer: &[u8] = &server_to_client;
            client.read_tls(&mut buffer).unwrap();
            client.process_new_packets().unwrap();
        }
    }

    (client, server)
}

/// The DER certificate the server presented during the handshake.
pub fn presented_certificate(client: &rustls::ClientConnection) -> Vec<u8> {
    client.peer_certificates().unwrap()[0].to_vec()
}
