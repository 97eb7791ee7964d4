use serde::Deserialize;

/// Challenge certificate upload, matching the wire format ACME orchestrators
/// send: byte slices serialized as base64 strings.
#[derive(Debug, Deserialize)]
pub struct ChallengeUpload {
    /// Base64-encoded DER certificate.
    #[serde(rename = "Cert")]
    pub cert: String,

    /// Base64-encoded PKCS#8 DER private key.
    #[serde(rename = "Key")]
    pub key: String,
}
