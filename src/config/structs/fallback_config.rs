use serde::{Deserialize, Serialize};

/// Where the process-wide fallback identity comes from.
///
/// When both `ssl_cert` and `ssl_key` point at PEM files, the fallback is
/// loaded from disk. Otherwise a self-signed certificate for `domain` (plus
/// localhost) is generated in memory at startup.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FallbackConfig {
    pub domain: String,
    pub ssl_cert: Option<String>,
    pub ssl_key: Option<String>,
}
