use serde::{Deserialize, Serialize};

/// Where a registration server takes the target hostname from.
///
/// The two deployments observed in the wild disagree on this, so it is a
/// per-server setting rather than a hardcoded choice.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum HostnameSource {
    /// Take the hostname from the `/tls-alpn-01/{hostname}` path segment.
    #[default]
    url_path,
    /// Take the hostname from the request's Host header, port stripped.
    host_header,
}
