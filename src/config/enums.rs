//! Configuration enumerations.

/// Errors raised while loading or saving the configuration file.
pub mod configuration_error;

/// Source of the hostname for an incoming registration request.
pub mod hostname_source;
