use std::sync::Arc;
use crate::config::structs::responder_config::ResponderConfig;
use crate::responder::traits::alpn_challenge_handler::AlpnChallengeHandler;

/// Shared application data available to a responder listener.
///
/// All fields are wrapped in `Arc` for safe sharing across the per-connection
/// tasks the listener spawns.
pub struct ResponderServiceData {
    /// Configuration for this responder instance.
    pub responder_config: Arc<ResponderConfig>,

    /// TLS server configuration carrying the certificate resolver.
    pub tls_config: Arc<rustls::ServerConfig>,

    /// Handler notified when a validation handshake completes.
    pub challenge_handler: Arc<dyn AlpnChallengeHandler>,
}

impl std::fmt::Debug for ResponderServiceData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponderServiceData")
            .field("responder_config", &self.responder_config)
            .field("alpn_protocols", &self.tls_config.alpn_protocols)
            .finish()
    }
}
