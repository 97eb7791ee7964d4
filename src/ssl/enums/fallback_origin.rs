#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackOrigin {
    SelfSigned(String),
    PemFiles(String, String),
}

impl FallbackOrigin {
    pub fn origin_type(&self) -> &'static str {
        match self {
            FallbackOrigin::SelfSigned(_) => "selfsigned",
            FallbackOrigin::PemFiles(_, _) => "pem",
        }
    }
}

impl std::fmt::Display for FallbackOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackOrigin::SelfSigned(domain) => {
                write!(f, "SelfSigned({})", domain)
            }
            FallbackOrigin::PemFiles(cert_path, key_path) => {
                write!(f, "PemFiles({}, {})", cert_path, key_path)
            }
        }
    }
}
