use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
use rustls::sign::CertifiedKey;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use crate::config::structs::fallback_config::FallbackConfig;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::fallback_origin::FallbackOrigin;
use crate::ssl::structs::fallback_certificate::FallbackCertificate;

impl FallbackCertificate {
    /// Builds the process-wide fallback identity from configuration.
    ///
    /// PEM paths take precedence when both are configured; otherwise a
    /// self-signed certificate for the configured domain is generated in
    /// memory.
    pub fn from_config(config: &FallbackConfig) -> Result<FallbackCertificate, CertificateError> {
        match (&config.ssl_cert, &config.ssl_key) {
            (Some(cert_path), Some(key_path)) if !cert_path.is_empty() && !key_path.is_empty() => {
                Self::from_pem_files(cert_path, key_path)
            }
            _ => Self::generate_self_signed(&config.domain),
        }
    }

    pub fn from_pem_files(cert_path: &str, key_path: &str) -> Result<FallbackCertificate, CertificateError> {
        let certs_file = File::open(cert_path)
            .map_err(|e| CertificateError::CertFileNotFound(format!("{}: {}", cert_path, e)))?;
        let mut certs_reader = BufReader::new(certs_file);
        let tls_certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut certs_reader)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CertificateError::CertParseError(e.to_string()))?;
        if tls_certs.is_empty() {
            return Err(CertificateError::CertParseError(
                "No certificates found in file".to_string(),
            ));
        }
        let key_file = File::open(key_path)
            .map_err(|e| CertificateError::KeyFileNotFound(format!("{}: {}", key_path, e)))?;
        let mut key_reader = BufReader::new(key_file);
        let tls_key = Self::parse_private_key(&mut key_reader, key_path)?;
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&tls_key)
            .map_err(|e| CertificateError::CertifiedKeyError(format!("{}", e)))?;
        Ok(FallbackCertificate {
            certified: Arc::new(CertifiedKey::new(tls_certs, signing_key)),
            origin: FallbackOrigin::PemFiles(cert_path.to_string(), key_path.to_string()),
            created_at: chrono::Utc::now(),
        })
    }

    pub fn generate_self_signed(domain: &str) -> Result<FallbackCertificate, CertificateError> {
        // Always include localhost, plus the configured domain if given.
        let mut subject_alt_names = vec![
            String::from("localhost")
        ];
        if domain != "localhost" {
            subject_alt_names.push(domain.to_string());
        }

        let rcgen::CertifiedKey { cert, signing_key } = rcgen::generate_simple_self_signed(subject_alt_names)
            .map_err(|e| CertificateError::SelfSignedError(e.to_string()))?;
        let tls_certs: Vec<CertificateDer<'static>> = vec![cert.der().clone()];
        let tls_key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(signing_key.serialize_der()));
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&tls_key)
            .map_err(|e| CertificateError::CertifiedKeyError(format!("{}", e)))?;
        Ok(FallbackCertificate {
            certified: Arc::new(CertifiedKey::new(tls_certs, signing_key)),
            origin: FallbackOrigin::SelfSigned(domain.to_string()),
            created_at: chrono::Utc::now(),
        })
    }

    pub fn certified_key(&self) -> Arc<CertifiedKey> {
        Arc::clone(&self.certified)
    }

    fn parse_private_key(
        reader: &mut BufReader<File>,
        key_path: &str,
    ) -> Result<PrivateKeyDer<'static>, CertificateError> {
        if let Some(key_result) = rustls_pemfile::pkcs8_private_keys(reader).next() {
            return key_result
                .map(PrivateKeyDer::Pkcs8)
                .map_err(|e| CertificateError::KeyParseError(e.to_string()));
        }
        let key_file = File::open(key_path)
            .map_err(|e| CertificateError::KeyFileNotFound(format!("{}: {}", key_path, e)))?;
        let mut reader = BufReader::new(key_file);
        if let Some(key_result) = rustls_pemfile::rsa_private_keys(&mut reader).next() {
            return key_result
                .map(PrivateKeyDer::Pkcs1)
                .map_err(|e| CertificateError::KeyParseError(e.to_string()));
        }
        let key_file = File::open(key_path)
            .map_err(|e| CertificateError::KeyFileNotFound(format!("{}: {}", key_path, e)))?;
        let mut reader = BufReader::new(key_file);
        if let Some(key_result) = rustls_pemfile::ec_private_keys(&mut reader).next() {
            return key_result
                .map(PrivateKeyDer::Sec1)
                .map_err(|e| CertificateError::KeyParseError(e.to_string()));
        }
        Err(CertificateError::NoKeyFound)
    }
}
