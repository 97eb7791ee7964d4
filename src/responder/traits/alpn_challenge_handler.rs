/// Capability interface notified when a tls-alpn-01 validation handshake
/// completes.
///
/// Implementations run on the connection-handling task, once per connection,
/// after the handshake finished with `acme-tls/1` as the negotiated protocol.
/// They must not block; anything heavier than bookkeeping belongs on another
/// task.
pub trait AlpnChallengeHandler: Send + Sync {
    /// `hostname` is the SNI value the validating client supplied, if any.
    fn challenge_served(&self, hostname: Option<&str>);
}
