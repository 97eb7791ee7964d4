//! HTTP registration API module.
//!
//! This module provides the endpoint an ACME orchestrator calls to arm a
//! hostname with its tls-alpn-01 challenge certificate before the
//! certificate authority connects for validation.
//!
//! # Endpoints Overview
//!
//! ## Challenge Registration
//! - `POST /tls-alpn-01/{hostname}` - Register a challenge certificate
//! - `POST /tls-alpn-01` - Same, with the hostname taken from the Host header
//!
//! The request body carries the DER certificate and the PKCS#8 DER key as
//! base64 strings:
//!
//! ```json
//! { "Cert": "<base64 DER>", "Key": "<base64 PKCS#8 DER>" }
//! ```
//!
//! On success the response body echoes the accepted hostname. A payload that
//! fails to decode is logged and dropped without touching the registry; the
//! response is best-effort text in that case.
//!
//! # Hostname Source
//!
//! Which of the two hostname sources is authoritative is a per-server
//! configuration choice (`hostname_source = "url_path" | "host_header"`).

/// Data structures for API service context.
pub mod structs;

/// Core API service functions and route configuration.
#[allow(clippy::module_inception)]
pub mod api;

/// Challenge certificate registration endpoints.
pub mod api_challenges;
