//! End-to-end verification flows against a local mock provider.

mod common;

use std::time::Duration;

use serde_json::json;
use social_login::{Configuration, ProfileResponse, VerificationRequest, verify};

use common::{MOCK_CLIENT_ID, spawn_mock_provider, unreachable_addr};

async fn mock_configuration() -> Configuration {
    let addr = spawn_mock_provider().await;
    let mut config = Configuration::new(MOCK_CLIENT_ID);
    config.google_tokeninfo_url = format!("http://{addr}/tokeninfo");
    config.facebook_graph_url = format!("http://{addr}");
    config
}

/// A valid Google credential comes back as a populated profile with the
/// original claims retained alongside the mapped fields.
#[tokio::test]
async fn test_google_verification_success() {
    let config = mock_configuration().await;
    let request = VerificationRequest::google("good-token");

    let profile = verify(&request, &config).await;
    assert!(!profile.is_failure());
    assert_eq!(profile.id.as_deref(), Some("123"));
    assert_eq!(profile.email.as_deref(), Some("a@b.com"));
    assert_eq!(profile.first_name.as_deref(), Some("A"));
    assert_eq!(profile.last_name.as_deref(), Some("B"));

    let serialized = serde_json::to_value(&profile).unwrap();
    assert_eq!(serialized["sub"], json!("123"));
    assert_eq!(serialized["aud"], json!(MOCK_CLIENT_ID));
    assert_eq!(serialized["email_verified"], json!("true"));
}

/// A provider-reported error passes through unchanged.
#[tokio::test]
async fn test_google_invalid_token_passthrough() {
    let config = mock_configuration().await;
    let request = VerificationRequest::google("expired-token");

    let profile = verify(&request, &config).await;
    assert_eq!(
        serde_json::to_value(&profile).unwrap(),
        json!({"error": "invalid_token"})
    );
}

/// A token minted for another client fails the audience check with exactly
/// `invalid_client`.
#[tokio::test]
async fn test_google_audience_mismatch() {
    let config = mock_configuration().await;
    let request = VerificationRequest::google("wrong-audience");

    let profile = verify(&request, &config).await;
    assert_eq!(profile, ProfileResponse::failure("invalid_client"));
}

#[tokio::test]
async fn test_google_unverified_email() {
    let config = mock_configuration().await;
    let request = VerificationRequest::google("unverified-email");

    let profile = verify(&request, &config).await;
    assert_eq!(profile, ProfileResponse::failure("unverified_email"));
}

/// An unreachable provider is a transport failure, distinct from both the
/// provider saying "no" and from a malformed body.
#[tokio::test]
async fn test_google_provider_unreachable() {
    let addr = unreachable_addr().await;
    let mut config = Configuration::new(MOCK_CLIENT_ID);
    config.google_tokeninfo_url = format!("http://{addr}/tokeninfo");
    config.request_timeout = Duration::from_secs(1);

    let request = VerificationRequest::google("good-token");
    let profile = verify(&request, &config).await;
    assert_eq!(profile, ProfileResponse::failure("provider_unreachable"));
}

/// A body that is not JSON is an invalid response.
#[tokio::test]
async fn test_google_unparsable_body() {
    let config = mock_configuration().await;
    let request = VerificationRequest::google("not-json");

    let profile = verify(&request, &config).await;
    assert_eq!(profile, ProfileResponse::failure("invalid_response"));
}

/// A valid Facebook access token resolves to the canonical profile fields.
#[tokio::test]
async fn test_facebook_verification_success() {
    let config = mock_configuration().await;
    let request = VerificationRequest::facebook("good-token");

    let profile = verify(&request, &config).await;
    assert!(!profile.is_failure());
    assert_eq!(profile.id.as_deref(), Some("10203040"));
    assert_eq!(profile.email.as_deref(), Some("a@b.com"));
    assert_eq!(profile.first_name.as_deref(), Some("A"));
    assert_eq!(profile.last_name.as_deref(), Some("B"));
}

/// A rejected Facebook token surfaces the Graph API error message.
#[tokio::test]
async fn test_facebook_invalid_token() {
    let config = mock_configuration().await;
    let request = VerificationRequest::facebook("bad-token");

    let profile = verify(&request, &config).await;
    assert_eq!(profile.error.as_deref(), Some("Invalid OAuth access token."));
    assert_eq!(profile.id, None);
}
