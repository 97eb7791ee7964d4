use serde::{Deserialize, Serialize};
use crate::config::structs::fallback_config::FallbackConfig;
use crate::config::structs::registration_config::RegistrationConfig;
use crate::config::structs::responder_config::ResponderConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub fallback: FallbackConfig,
    pub responder_server: Vec<ResponderConfig>,
    pub registration_server: Vec<RegistrationConfig>,
}
