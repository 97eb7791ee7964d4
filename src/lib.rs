//! # ALPN Responder
//!
//! A standalone ACME tls-alpn-01 challenge responder built with Rust, Rustls and the Actix-web framework.
//!
//! ## Overview
//!
//! ALPN Responder terminates TLS on a challenge port and decides, during every
//! handshake, which certificate to present: a challenge certificate registered
//! for the requested SNI hostname when the client advertises the `acme-tls/1`
//! ALPN protocol, or a process-wide fallback identity for everything else.
//! Challenge certificates are pushed into an in-memory registry at runtime
//! through a small HTTP registration API, so an external ACME orchestrator can
//! arm a hostname moments before the certificate authority connects to
//! validate it.
//!
//! ## Features
//!
//! - **SNI-driven selection**: per-handshake certificate resolution through a
//!   Rustls certificate resolver, fully concurrent with registrations
//! - **tls-alpn-01 support**: advertises `acme-tls/1` and signals challenge
//!   completion through a pluggable handler once the handshake finishes
//! - **HTTP/2 friendly**: non-challenge clients negotiate `h2`/`http/1.1`
//!   against the fallback identity on the same port
//! - **Registration API**: `POST /tls-alpn-01/{hostname}` accepting a DER
//!   certificate and PKCS#8 key, with a configurable hostname source
//! - **Fallback identity**: loaded from PEM files or generated self-signed at
//!   startup
//! - **Graceful shutdown**: SIGINT/SIGTERM stop the listeners without tearing
//!   down handshakes already in flight
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use alpn_responder::config::structs::configuration::Configuration;
//! use alpn_responder::ssl::ssl::create_challenge_registry;
//!
//! // Load configuration from file
//! let config = Configuration::load_from_file(false)?;
//!
//! // Create the shared challenge registry
//! let registry = create_challenge_registry();
//! ```
//!
//! ## Modules
//!
//! - [`api`] - HTTP registration endpoints feeding the challenge registry
//! - [`common`] - Shared utilities, error handling, and logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`responder`] - Challenge TLS listener and completion handling
//! - [`ssl`] - Challenge registry, fallback identity, and certificate resolution

/// HTTP registration API module.
///
/// Provides the endpoints an ACME orchestrator uses to register challenge
/// certificates for hostnames before validation connections arrive.
pub mod api;

/// Common utilities and shared functionality.
///
/// Contains logging setup, startup port checks, and the error type used
/// across all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
/// Supports multiple responder and registration server instances.
pub mod config;

/// Challenge TLS listener module.
///
/// Accepts connections on the challenge port, terminates TLS with the
/// certificate resolver, and notifies the challenge handler when a
/// tls-alpn-01 validation handshake completes.
pub mod responder;

/// SSL/TLS certificate management module.
///
/// Provides the challenge certificate registry, the fallback identity, and
/// the handshake-time certificate resolver for SNI-based selection.
pub mod ssl;

/// CLI argument parsing structures.
///
/// Defines command-line interface options for the responder binary including
/// configuration generation and self-signed certificate creation.
pub mod structs;
