//! Challenge TLS listener module.
//!
//! This module runs the responder listeners: plain TCP accept loops that
//! terminate TLS using the SNI/ALPN-aware certificate resolver and then
//! immediately close the connection again.
//!
//! # Protocol Overview
//!
//! A tls-alpn-01 validation connection carries no application data. The
//! certificate authority connects with SNI set to the hostname under
//! validation and `acme-tls/1` in its ALPN list, checks the certificate
//! presented during the handshake, and disconnects. Completing the handshake
//! with the right certificate IS the challenge response.
//!
//! # Completion Handling
//!
//! When a handshake finishes with `acme-tls/1` as the negotiated protocol,
//! the configured [`traits::alpn_challenge_handler::AlpnChallengeHandler`]
//! fires exactly once for that connection. The handler runs on the
//! connection task and is notification-only; the default implementation
//! writes a log line.
//!
//! # Ordinary Traffic
//!
//! Clients that do not advertise `acme-tls/1` negotiate `h2`/`http/1.1`
//! against the fallback identity and are closed without application data as
//! well; the listener exists purely to serve handshakes.

/// Implementation blocks for challenge handlers.
pub mod impls;

/// Data structures for the responder service.
pub mod structs;

/// Capability traits for challenge completion notification.
pub mod traits;

/// Core responder service implementation.
#[allow(clippy::module_inception)]
pub mod responder;
