//! Configuration data structures.
//!
//! This module contains all the struct definitions for configuration options.
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Fallback identity configuration (PEM paths or self-signed domain).
pub mod fallback_config;

/// Challenge TLS listener configuration.
pub mod responder_config;

/// Registration endpoint configuration (address, SSL, timeouts).
pub mod registration_config;
