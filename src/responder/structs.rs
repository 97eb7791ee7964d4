//! Data structures for the responder service.

/// Default challenge handler writing a log line per completed validation.
pub mod log_challenge_handler;

/// Shared data context for responder listeners.
pub mod responder_service_data;
