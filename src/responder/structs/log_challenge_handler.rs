/// Challenge handler that records completed validations in the log.
///
/// This is the default wiring; an embedding orchestrator replaces it with its
/// own [`crate::responder::traits::alpn_challenge_handler::AlpnChallengeHandler`]
/// implementation to observe challenge completion programmatically.
#[derive(Debug, Default)]
pub struct LogChallengeHandler;
