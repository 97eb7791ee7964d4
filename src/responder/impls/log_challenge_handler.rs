use log::info;
use crate::responder::structs::log_challenge_handler::LogChallengeHandler;
use crate::responder::traits::alpn_challenge_handler::AlpnChallengeHandler;

impl AlpnChallengeHandler for LogChallengeHandler {
    fn challenge_served(&self, hostname: Option<&str>) {
        info!("[RESPONDER] acme-tls/1 handshake complete for {}", hostname.unwrap_or("<no sni>"));
    }
}
