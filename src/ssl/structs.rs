//! Data structures for certificate management.

/// Handshake-time certificate resolver with SNI and ALPN awareness.
pub mod acme_certificate_resolver;

/// A decoded challenge certificate bound to one hostname.
pub mod challenge_certificate;

/// Concurrency-safe hostname to challenge certificate mapping.
pub mod challenge_registry;

/// The process-wide default identity for non-challenge traffic.
pub mod fallback_certificate;
