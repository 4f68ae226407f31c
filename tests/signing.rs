//! Signatures produced by the SDK verify against the partner public key.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use faspay_snap::signing::{
    build_string_to_sign, canonicalize, sign, sign_request, HttpMethod, PrivateKey,
};
use faspay_snap::error::SigningError;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::pkcs8::DecodePublicKey;
use rsa::signature::Verifier;
use rsa::RsaPublicKey;
use sha2::Sha256;

const PKCS8_PEM: &str = include_str!("fixtures/partner_pkcs8.pem");
const PKCS1_PEM: &str = include_str!("fixtures/partner_pkcs1.pem");
const PUBLIC_PEM: &str = include_str!("fixtures/partner_public.pem");

const BALANCE_PATH: &str = "/account/v1.0/balance-inquiry";

fn verifying_key() -> VerifyingKey<Sha256> {
    let public = RsaPublicKey::from_public_key_pem(PUBLIC_PEM).unwrap();
    VerifyingKey::<Sha256>::new(public)
}

fn verify(message: &str, signature_b64: &str) -> bool {
    let raw = STANDARD.decode(signature_b64).unwrap();
    let signature = Signature::try_from(raw.as_slice()).unwrap();
    verifying_key().verify(message.as_bytes(), &signature).is_ok()
}

#[test]
fn test_pkcs8_signature_verifies() {
    let key = PrivateKey::from_pem(PKCS8_PEM).unwrap();
    let body = canonicalize(r#"{ "accountNo" : "123" }"#);
    let signed = sign_request(
        HttpMethod::Post,
        BALANCE_PATH,
        &body,
        "2025-06-01T10:00:00+07:00",
        &key,
    )
    .unwrap();

    assert_eq!(
        signed.string_to_sign,
        "POST:/account/v1.0/balance-inquiry:a510ebcc3054187f6cabcacdf4640f30d020b5b8e443344f07108b4b28ae9111:2025-06-01T10:00:00+07:00"
    );
    assert_eq!(STANDARD.decode(&signed.signature).unwrap().len(), 256);
    assert!(verify(&signed.string_to_sign, &signed.signature));
}

#[test]
fn test_pkcs1_signature_verifies() {
    let key = PrivateKey::from_pem(PKCS1_PEM).unwrap();
    let sts = build_string_to_sign(HttpMethod::Post, BALANCE_PATH, "{}", "2025-06-01T10:00:00+07:00");
    let signature = sign(&sts, &key).unwrap();
    assert!(verify(&sts, &signature));
}

#[test]
fn test_both_envelopes_sign_identically() {
    // PKCS#1 v1.5 is deterministic, and both files hold the same key.
    let pkcs1 = PrivateKey::from_pem(PKCS1_PEM).unwrap();
    let pkcs8 = PrivateKey::from_pem(PKCS8_PEM).unwrap();
    let sts = build_string_to_sign(HttpMethod::Post, BALANCE_PATH, "{}", "2025-06-01T10:00:00+07:00");
    assert_eq!(sign(&sts, &pkcs1).unwrap(), sign(&sts, &pkcs8).unwrap());
}

#[test]
fn test_signature_changes_with_timestamp() {
    let key = PrivateKey::from_pem(PKCS8_PEM).unwrap();
    let first = sign_request(HttpMethod::Post, BALANCE_PATH, "{}", "2025-06-01T10:00:00+07:00", &key)
        .unwrap();
    let second = sign_request(HttpMethod::Post, BALANCE_PATH, "{}", "2025-06-01T10:00:01+07:00", &key)
        .unwrap();
    assert_ne!(first.signature, second.signature);
    assert!(verify(&first.string_to_sign, &first.signature));
    assert!(!verify(&second.string_to_sign, &first.signature));
}

#[test]
fn test_tampered_body_does_not_verify() {
    let key = PrivateKey::from_pem(PKCS8_PEM).unwrap();
    let signed = sign_request(
        HttpMethod::Post,
        BALANCE_PATH,
        r#"{"accountNo":"123"}"#,
        "2025-06-01T10:00:00+07:00",
        &key,
    )
    .unwrap();
    let tampered = build_string_to_sign(
        HttpMethod::Post,
        BALANCE_PATH,
        r#"{"accountNo":"124"}"#,
        "2025-06-01T10:00:00+07:00",
    );
    assert!(!verify(&tampered, &signed.signature));
}

#[test]
fn test_public_key_matches_fixture() {
    let key = PrivateKey::from_pem(PKCS1_PEM).unwrap();
    let fixture = RsaPublicKey::from_public_key_pem(PUBLIC_PEM).unwrap();
    assert_eq!(key.public_key(), &fixture);
    assert_eq!(key.modulus_len(), 256);
}

#[test]
fn test_public_key_pem_is_not_a_private_key() {
    let err = PrivateKey::from_pem(PUBLIC_PEM).unwrap_err();
    assert!(matches!(err, SigningError::UnsupportedEnvelope));
}
