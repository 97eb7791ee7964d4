use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use crate::ssl::structs::challenge_certificate::ChallengeCertificate;
use crate::ssl::structs::challenge_registry::ChallengeRegistry;

impl Default for ChallengeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ChallengeRegistry {
    pub fn new() -> ChallengeRegistry {
        ChallengeRegistry {
            challenges: RwLock::new(HashMap::new()),
        }
    }

    /// Hostname normalization applied on both the write and the read path.
    ///
    /// SNI values are matched case-insensitively and never carry a trailing
    /// dot, so registrations are stored the same way.
    pub fn normalize_hostname(hostname: &str) -> String {
        hostname.trim_end_matches('.').to_ascii_lowercase()
    }

    /// Inserts or replaces the challenge certificate for a hostname.
    ///
    /// Last write wins; a handshake racing this call observes either the old
    /// or the new entry, never a mix of both.
    pub fn put(&self, hostname: &str, certificate: ChallengeCertificate) {
        self.challenges.write().insert(
            Self::normalize_hostname(hostname),
            Arc::new(certificate),
        );
    }

    pub fn get(&self, hostname: &str) -> Option<Arc<ChallengeCertificate>> {
        self.challenges.read().get(&Self::normalize_hostname(hostname)).cloned()
    }

    pub fn remove(&self, hostname: &str) -> Option<Arc<ChallengeCertificate>> {
        self.challenges.write().remove(&Self::normalize_hostname(hostname))
    }

    pub fn len(&self) -> usize {
        self.challenges.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.read().is_empty()
    }

    pub fn hostnames(&self) -> Vec<String> {
        self.challenges.read().keys().cloned().collect()
    }
}
