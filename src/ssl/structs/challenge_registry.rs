use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use crate::ssl::structs::challenge_certificate::ChallengeCertificate;

/// Thread-safe mapping from hostname to challenge certificate.
///
/// Registrations and handshakes touch this map concurrently; every access is
/// a single lock-guarded map operation, so readers never observe a partially
/// written entry and writers never hold the lock across anything slower than
/// an insert.
pub struct ChallengeRegistry {
    pub(crate) challenges: RwLock<HashMap<String, Arc<ChallengeCertificate>>>,
}

impl std::fmt::Debug for ChallengeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let challenges = self.challenges.read();
        f.debug_struct("ChallengeRegistry")
            .field("challenges_count", &challenges.len())
            .field("hostnames", &challenges.keys().collect::<Vec<_>>())
            .finish()
    }
}
