//! Enumerations for certificate management.

/// Errors raised while decoding, loading, or building certificates.
pub mod certificate_error;

/// Where the fallback identity came from.
pub mod fallback_origin;
