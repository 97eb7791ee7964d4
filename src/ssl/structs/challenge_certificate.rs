use rustls::sign::CertifiedKey;
use std::sync::Arc;

/// A decoded tls-alpn-01 challenge credential.
///
/// The certificate chain and signing key are already converted into the form
/// the TLS stack presents during a handshake, so the hot path never parses
/// anything. Replaced wholesale when the same hostname is registered again.
pub struct ChallengeCertificate {
    pub certified: Arc<CertifiedKey>,
    pub registered_at: chrono::DateTime<chrono::Utc>,
}

impl std::fmt::Debug for ChallengeCertificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChallengeCertificate")
            .field("certs_count", &self.certified.cert.len())
            .field("registered_at", &self.registered_at)
            .finish()
    }
}
