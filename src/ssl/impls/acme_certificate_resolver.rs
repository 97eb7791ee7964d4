use log::debug;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use std::sync::Arc;
use crate::ssl::ssl::ACME_TLS_ALPN_PROTOCOL;
use crate::ssl::structs::acme_certificate_resolver::AcmeCertificateResolver;
use crate::ssl::structs::challenge_registry::ChallengeRegistry;
use crate::ssl::structs::fallback_certificate::FallbackCertificate;

impl AcmeCertificateResolver {
    pub fn new(
        challenge_registry: Arc<ChallengeRegistry>,
        fallback: Arc<FallbackCertificate>,
    ) -> AcmeCertificateResolver {
        AcmeCertificateResolver {
            challenge_registry,
            fallback,
        }
    }

    /// Returns `true` when the client's ALPN list contains `acme-tls/1`.
    ///
    /// The advertised list may carry other protocols next to the challenge
    /// protocol, so this scans instead of requiring an exact match.
    pub fn is_challenge_request(client_hello: &ClientHello<'_>) -> bool {
        client_hello
            .alpn()
            .into_iter()
            .flatten()
            .any(|protocol| protocol == ACME_TLS_ALPN_PROTOCOL)
    }
}

impl ResolvesServerCert for AcmeCertificateResolver {
    fn resolve(&self, client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        if Self::is_challenge_request(&client_hello) {
            return match client_hello.server_name() {
                Some(server_name) => match self.challenge_registry.get(server_name) {
                    Some(challenge) => Some(challenge.certified_key()),
                    None => {
                        // An absent registration is a normal race during
                        // challenge setup, not an error.
                        debug!("[SSL] No challenge certificate registered for {}", server_name);
                        Some(self.fallback.certified_key())
                    }
                },
                None => {
                    debug!("[SSL] Challenge handshake without SNI, presenting fallback");
                    Some(self.fallback.certified_key())
                }
            };
        }
        Some(self.fallback.certified_key())
    }
}
