use serde::{Deserialize, Serialize};
use crate::config::enums::hostname_source::HostnameSource;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegistrationConfig {
    pub enabled: bool,
    pub bind_address: String,
    pub hostname_source: HostnameSource,
    pub keep_alive: Option<u64>,
    pub request_timeout: Option<u64>,
    pub disconnect_timeout: Option<u64>,
    pub threads: Option<u64>,
    pub ssl: Option<bool>,
    pub ssl_key: Option<String>,
    pub ssl_cert: Option<String>,
}
