use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ResponderConfig {
    pub enabled: bool,
    pub bind_address: String,
    /// Protocols advertised after `acme-tls/1`, so ordinary application
    /// traffic can still negotiate on the same port.
    pub alpn_protocols: Vec<String>,
}
