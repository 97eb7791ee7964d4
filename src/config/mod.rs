//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the responder
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **fallback**: The default identity presented for non-challenge traffic
//! - **responder_server**: Challenge TLS listener instances
//! - **registration_server**: HTTP registration endpoint instances
//!
//! # Features
//!
//! - TOML file parsing with detailed error messages
//! - Default value generation via `--create-config`
//! - Multiple server instance configurations
//! - Startup validation of addresses and certificate paths
//!
//! # Example
//!
//! ```rust,ignore
//! use alpn_responder::config::structs::configuration::Configuration;
//!
//! // Load configuration from file
//! let config = Configuration::load_from_file(false)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (hostname source, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
