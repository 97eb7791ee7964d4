//! Data structures for the common module.

/// Custom error type carrying a plain message.
pub mod custom_error;
