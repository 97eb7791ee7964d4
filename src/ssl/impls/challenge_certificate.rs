use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
use rustls::sign::CertifiedKey;
use std::sync::Arc;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::challenge_certificate::ChallengeCertificate;

impl ChallengeCertificate {
    /// Builds a challenge certificate from a DER certificate and a PKCS#8 DER key.
    ///
    /// Both inputs are fully validated here, so the registry and the resolver
    /// never have to deal with malformed material.
    pub fn from_der(cert_der: Vec<u8>, key_der: Vec<u8>) -> Result<ChallengeCertificate, CertificateError> {
        let certs: Vec<CertificateDer<'static>> = vec![CertificateDer::from(cert_der)];
        let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key_der));
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&key)
            .map_err(|e| CertificateError::KeyParseError(e.to_string()))?;
        let certified = CertifiedKey::new(certs, signing_key);
        certified.keys_match().map_err(|e| match e {
            rustls::Error::InvalidCertificate(reason) => CertificateError::CertParseError(format!("{:?}", reason)),
            other => CertificateError::KeyMismatch(other.to_string()),
        })?;
        Ok(ChallengeCertificate {
            certified: Arc::new(certified),
            registered_at: chrono::Utc::now(),
        })
    }

    /// Builds a challenge certificate from base64-encoded DER material, as
    /// received on the registration endpoint.
    pub fn from_base64(cert_base64: &str, key_base64: &str) -> Result<ChallengeCertificate, CertificateError> {
        use base64::prelude::*;
        let cert_der = BASE64_STANDARD.decode(cert_base64)
            .map_err(|e| CertificateError::Base64DecodeError(format!("certificate: {}", e)))?;
        let key_der = BASE64_STANDARD.decode(key_base64)
            .map_err(|e| CertificateError::Base64DecodeError(format!("key: {}", e)))?;
        Self::from_der(cert_der, key_der)
    }

    pub fn certified_key(&self) -> Arc<CertifiedKey> {
        Arc::clone(&self.certified)
    }
}
