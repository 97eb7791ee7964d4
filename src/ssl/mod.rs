//! SSL/TLS certificate management module.
//!
//! This module provides the challenge certificate registry, the fallback
//! identity, and the handshake-time certificate resolver. It decides, for
//! every incoming TLS handshake, which certificate the responder presents.
//!
//! # Certificate Selection
//!
//! The resolver inspects the ClientHello of each handshake:
//! - client advertises `acme-tls/1` and the SNI hostname has a registered
//!   challenge certificate: that certificate is presented
//! - client advertises `acme-tls/1` but nothing is registered for the
//!   hostname: the fallback identity is presented (the validation then fails
//!   on the client side, which is the expected signal that registration has
//!   not completed yet)
//! - anything else: the fallback identity is presented
//!
//! # Concurrency
//!
//! The registry is shared between the registration API (writes) and every
//! in-flight handshake (reads). All map operations happen under a
//! `parking_lot` read-write lock held for O(1) work only, so a handshake
//! never waits on anything slower than a map lookup.
//!
//! # Example
//!
//! ```rust,ignore
//! use alpn_responder::ssl::ssl::create_challenge_registry;
//! use alpn_responder::ssl::structs::challenge_certificate::ChallengeCertificate;
//!
//! let registry = create_challenge_registry();
//! let certificate = ChallengeCertificate::from_der(cert_der, key_der)?;
//! registry.put("example.com", certificate);
//! ```

/// Enumerations for certificate errors and fallback origins.
pub mod enums;

/// Implementation blocks for certificate handling.
pub mod impls;

/// Data structures for the registry, resolver, and identities.
pub mod structs;

/// Core helpers for registry and TLS server config creation.
#[allow(clippy::module_inception)]
pub mod ssl;
