use rustls::sign::CertifiedKey;
use std::sync::Arc;
use crate::ssl::enums::fallback_origin::FallbackOrigin;

/// The default identity presented for all non-challenge connections.
///
/// Constructed once at startup and shared by every connection afterwards, so
/// no locking is needed on the handshake path.
pub struct FallbackCertificate {
    pub certified: Arc<CertifiedKey>,
    pub origin: FallbackOrigin,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl std::fmt::Debug for FallbackCertificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackCertificate")
            .field("certs_count", &self.certified.cert.len())
            .field("origin", &self.origin)
            .field("created_at", &self.created_at)
            .finish()
    }
}
