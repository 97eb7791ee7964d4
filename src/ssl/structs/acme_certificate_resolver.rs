use std::sync::Arc;
use crate::ssl::structs::challenge_registry::ChallengeRegistry;
use crate::ssl::structs::fallback_certificate::FallbackCertificate;

/// Per-handshake certificate selector.
///
/// Invoked by the TLS stack for every incoming handshake. Consults the
/// challenge registry when the client advertises `acme-tls/1`, and hands out
/// the fallback identity in every other case. The resolver itself performs no
/// I/O and holds no lock beyond the registry's own read lock.
pub struct AcmeCertificateResolver {
    pub(crate) challenge_registry: Arc<ChallengeRegistry>,
    pub(crate) fallback: Arc<FallbackCertificate>,
}

impl std::fmt::Debug for AcmeCertificateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcmeCertificateResolver")
            .field("challenges_count", &self.challenge_registry.len())
            .field("fallback_origin", &self.fallback.origin)
            .finish()
    }
}
