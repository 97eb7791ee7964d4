//! Shared data context for API request handlers.

use std::sync::Arc;
use crate::config::structs::registration_config::RegistrationConfig;
use crate::ssl::structs::challenge_registry::ChallengeRegistry;

/// Shared application data available to all API request handlers.
///
/// This struct is injected into Actix-web's application data and provides
/// request handlers with access to the challenge registry and the
/// registration server configuration.
///
/// # Thread Safety
///
/// Both fields are wrapped in `Arc` for safe sharing across multiple
/// worker threads in the Actix-web runtime.
#[derive(Debug)]
pub struct ApiServiceData {
    /// Registry the handlers write challenge certificates into.
    pub challenge_registry: Arc<ChallengeRegistry>,

    /// Configuration for this registration server instance.
    pub registration_config: Arc<RegistrationConfig>,
}
