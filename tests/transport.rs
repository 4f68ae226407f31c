//! Signed transport against a mock gateway.

#![cfg(feature = "http")]

use std::sync::Arc;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use faspay_snap::prelude::*;
use faspay_snap::signing::build_string_to_sign;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::pkcs8::DecodePublicKey;
use rsa::signature::Verifier;
use rsa::RsaPublicKey;
use serde_json::json;
use sha2::Sha256;
use wiremock::matchers::{body_string, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PKCS8_PEM: &str = include_str!("fixtures/partner_pkcs8.pem");
const PUBLIC_PEM: &str = include_str!("fixtures/partner_public.pem");
const CERT_PEM: &str = include_str!("fixtures/gateway_cert.pem");

const FIXED_TIMESTAMP: &str = "2025-06-01T10:00:00+07:00";
const BALANCE_PATH: &str = "/account/v1.0/balance-inquiry";

/// Credentials with a frozen clock.
struct FixedClock {
    inner: PartnerCredentials,
}

impl CredentialSource for FixedClock {
    fn timestamp(&self) -> String {
        FIXED_TIMESTAMP.to_string()
    }

    fn external_id(&self) -> String {
        self.inner.external_id()
    }

    fn partner_id(&self) -> &str {
        self.inner.partner_id()
    }

    fn private_key(&self) -> &PrivateKey {
        self.inner.private_key()
    }
}

fn config(base_url: &str) -> SnapConfig {
    SnapConfig::builder("99999", PKCS8_PEM, CERT_PEM)
        .base_url(base_url)
        .build()
}

fn client(base_url: &str) -> FaspaySnapClient {
    FaspaySnapClient::new(config(base_url)).unwrap()
}

fn fixed_clock_client(base_url: &str) -> FaspaySnapClient {
    let credentials = FixedClock {
        inner: PartnerCredentials::from_pem("99999", PKCS8_PEM).unwrap(),
    };
    FaspaySnapClient::builder(config(base_url))
        .credentials(Arc::new(credentials))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_end_to_end_signature_verifies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(BALANCE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseCode": "2001100",
            "responseMessage": "Successful",
            "accountNo": "123",
            "accountInfos": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = fixed_clock_client(&server.uri());
    let response = client
        .balances()
        .inquire(&BalanceInquiryRequest::new("123"))
        .await
        .unwrap();
    assert!(response.is_success());

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let header_str = |name: &str| request.headers.get(name).unwrap().to_str().unwrap().to_string();

    assert_eq!(header_str("x-timestamp"), FIXED_TIMESTAMP);
    assert_eq!(request.body, br#"{"accountNo":"123"}"#.to_vec());

    let signature = STANDARD.decode(header_str("x-signature")).unwrap();
    assert_eq!(signature.len(), 256);

    let expected = build_string_to_sign(
        HttpMethod::Post,
        BALANCE_PATH,
        r#"{"accountNo":"123"}"#,
        FIXED_TIMESTAMP,
    );
    let public = RsaPublicKey::from_public_key_pem(PUBLIC_PEM).unwrap();
    let signature = Signature::try_from(signature.as_slice()).unwrap();
    assert!(VerifyingKey::<Sha256>::new(public)
        .verify(expected.as_bytes(), &signature)
        .is_ok());
}

#[tokio::test]
async fn test_fixed_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/echo"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(header("user-agent", "FaspaySendMeSnapRust/1.0.0"))
        .and(header("x-partner-id", "99999"))
        .and(header("channel-id", "88001"))
        .and(header_exists("x-timestamp"))
        .and(header_exists("x-signature"))
        .and(header_exists("x-external-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let _: serde_json::Value = client.execute("/echo", &json!({})).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let external_id = requests[0].headers.get("x-external-id").unwrap().to_str().unwrap();
    assert!(external_id.starts_with("99999"));
    assert!(external_id.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_body_sent_is_canonical() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/echo"))
        .and(body_string(r#"{"remark":"rent for june","partnerServiceId":"   88001"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct RemarkPayload {
        remark: &'static str,
        partner_service_id: &'static str,
    }

    let client = client(&server.uri());
    let _: serde_json::Value = client
        .execute(
            "/echo",
            &RemarkPayload {
                remark: "rent for june",
                partner_service_id: "   88001",
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_external_id_rotates_per_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client(&server.uri());
    for _ in 0..2 {
        let _: serde_json::Value = client.execute("/echo", &json!({})).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_ne!(
        requests[0].headers.get("x-external-id"),
        requests[1].headers.get("x-external-id")
    );
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(BALANCE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("gateway exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server.uri())
        .balances()
        .inquire(&BalanceInquiryRequest::new("123"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.body(), Some("gateway exploded"));
}

#[tokio::test]
async fn test_unauthorized_maps_to_api_error() {
    let server = MockServer::start().await;
    let body = r#"{"responseCode":"4011100","responseMessage":"Unauthorized. Signature"}"#;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string(body))
        .mount(&server)
        .await;

    let err = client(&server.uri())
        .execute::<_, serde_json::Value>("/echo", &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, SnapError::Api { status: 401, .. }));
    assert_eq!(err.body(), Some(body));
}

#[tokio::test]
async fn test_business_failure_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(BALANCE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseCode": "4031114",
            "responseMessage": "Insufficient Funds"
        })))
        .mount(&server)
        .await;

    let response = client(&server.uri())
        .balances()
        .inquire(&BalanceInquiryRequest::new("123"))
        .await
        .unwrap();

    assert!(!response.is_success());
    assert_eq!(response.response_code, "4031114");
    assert_eq!(response.response_message, "Insufficient Funds");
}

#[tokio::test]
async fn test_malformed_body_maps_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client(&server.uri())
        .balances()
        .inquire(&BalanceInquiryRequest::new("123"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decoding);
    assert_eq!(err.body(), Some("<html>maintenance</html>"));
}

#[tokio::test]
async fn test_missing_response_code_maps_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accountNo": "123"})))
        .mount(&server)
        .await;

    let err = client(&server.uri())
        .balances()
        .inquire(&BalanceInquiryRequest::new("123"))
        .await
        .unwrap_err();

    assert!(matches!(err, SnapError::Decode { .. }));
}

#[tokio::test]
async fn test_connection_reset_maps_to_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            drop(socket);
        }
    });

    let err = client(&format!("http://{}", addr))
        .execute::<_, serde_json::Value>("/echo", &json!({}))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.status().is_none());
}

#[tokio::test]
async fn test_slow_gateway_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = SnapConfig::builder("99999", PKCS8_PEM, CERT_PEM)
        .base_url(server.uri())
        .timeout(Duration::from_millis(200))
        .build();
    let err = FaspaySnapClient::new(config)
        .unwrap()
        .execute::<_, serde_json::Value>("/echo", &json!({}))
        .await
        .unwrap_err();

    match err {
        SnapError::Transport(e) => assert!(e.is_timeout()),
        other => panic!("expected transport error, got {:?}", other),
    }
}
