//! Pinned trust store for the gateway connection.
//!
//! Only the certificates in the configured PEM bundle are trusted; built-in
//! and system roots are never consulted. A pinned certificate is accepted in
//! two ways:
//!
//! - the server presents exactly that certificate (byte-equal DER), which is
//!   the usual case when the partner is handed the gateway's own certificate;
//! - the server's chain verifies up to it as a trust anchor (a pinned CA).

use std::sync::Arc;

use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::client::WebPkiServerVerifier;
use rustls::crypto::{ring, verify_tls12_signature, verify_tls13_signature, CryptoProvider};
use rustls::pki_types::pem::PemObject;
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{
    CertificateError, ClientConfig, DigitallySignedStruct, RootCertStore, SignatureScheme,
};

use crate::error::SnapError;

/// Parse every certificate in a PEM bundle. An empty bundle is an error.
pub fn parse_pinned_certificates(pem: &str) -> Result<Vec<CertificateDer<'static>>, SnapError> {
    let certificates = CertificateDer::pem_slice_iter(pem.as_bytes())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SnapError::Config(format!("Invalid gateway certificate: {}", e)))?;
    if certificates.is_empty() {
        return Err(SnapError::Config(
            "Gateway certificate PEM contains no certificate".to_string(),
        ));
    }
    Ok(certificates)
}

/// rustls client configuration trusting only `certificates`.
pub fn pinned_client_config(
    certificates: Vec<CertificateDer<'static>>,
) -> Result<ClientConfig, SnapError> {
    let provider = Arc::new(ring::default_provider());
    let verifier = PinnedCertVerifier::new(certificates, provider.clone())?;

    let config = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| SnapError::Config(format!("Unsupported TLS configuration: {}", e)))?
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(verifier))
        .with_no_client_auth();
    Ok(config)
}

/// Server certificate verifier for a pinned bundle.
///
/// An exact match skips chain building and name checks: the pin is the
/// identity. The handshake signature is still verified against the
/// certificate's key, so the peer must hold the matching private key.
#[derive(Debug)]
pub struct PinnedCertVerifier {
    pinned: Vec<CertificateDer<'static>>,
    /// `None` when no pinned certificate is usable as a trust anchor.
    anchors: Option<Arc<WebPkiServerVerifier>>,
    provider: Arc<CryptoProvider>,
}

impl PinnedCertVerifier {
    pub fn new(
        pinned: Vec<CertificateDer<'static>>,
        provider: Arc<CryptoProvider>,
    ) -> Result<Self, SnapError> {
        let mut roots = RootCertStore::empty();
        let (added, ignored) = roots.add_parsable_certificates(pinned.iter().cloned());
        if ignored > 0 {
            tracing::debug!(ignored, "Pinned certificates not usable as trust anchors");
        }

        let anchors = if added > 0 {
            let verifier =
                WebPkiServerVerifier::builder_with_provider(Arc::new(roots), provider.clone())
                    .build()
                    .map_err(|e| {
                        SnapError::Config(format!("Failed to build certificate verifier: {}", e))
                    })?;
            Some(verifier)
        } else {
            None
        };

        Ok(Self {
            pinned,
            anchors,
            provider,
        })
    }

    fn is_pinned(&self, end_entity: &CertificateDer<'_>) -> bool {
        self.pinned
            .iter()
            .any(|pinned| pinned.as_ref() == end_entity.as_ref())
    }
}

impl ServerCertVerifier for PinnedCertVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        server_name: &ServerName<'_>,
        ocsp_response: &[u8],
        now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        if self.is_pinned(end_entity) {
            return Ok(ServerCertVerified::assertion());
        }
        match &self.anchors {
            Some(anchors) => anchors.verify_server_cert(
                end_entity,
                intermediates,
                server_name,
                ocsp_response,
                now,
            ),
            None => Err(rustls::Error::InvalidCertificate(
                CertificateError::UnknownIssuer,
            )),
        }
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls12_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls13_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider
            .signature_verification_algorithms
            .supported_schemes()
    }
}
