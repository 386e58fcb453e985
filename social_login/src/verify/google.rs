use serde_json::{Map, Value};

use crate::config::Configuration;
use crate::errors::VerifyError;
use crate::types::ProfileResponse;

use super::utils::get_client;

/// Verifies a Google ID token against the tokeninfo endpoint and normalizes
/// the claims into a profile.
pub(super) async fn verify_id_token(
    id_token: &str,
    config: &Configuration,
) -> Result<ProfileResponse, VerifyError> {
    let client = get_client(config.request_timeout);
    let response = client
        .get(&config.google_tokeninfo_url)
        .query(&[("id_token", id_token)])
        .send()
        .await
        .map_err(|e| VerifyError::Transport(e.to_string()))?;

    let response_body = response
        .text()
        .await
        .map_err(|e| VerifyError::Transport(e.to_string()))?;

    tracing::debug!("Tokeninfo response body: {:#?}", response_body);
    let claims: Map<String, Value> = serde_json::from_str(&response_body).map_err(|e| {
        VerifyError::InvalidResponse(format!("Failed to deserialize tokeninfo body: {e}"))
    })?;

    normalize_claims(claims, &config.google_client_id)
}

/// Applies the audience and email-verification checks, then maps Google claim
/// names to canonical profile fields (`id ← sub`, `first_name ← given_name`,
/// `last_name ← family_name`, `email` unchanged). Original claims are retained
/// alongside the mapped fields.
///
/// A mapping that already carries an `error` key is the provider saying the
/// credential is invalid or expired; it is passed through untouched.
fn normalize_claims(
    mut claims: Map<String, Value>,
    client_id: &str,
) -> Result<ProfileResponse, VerifyError> {
    if claims.contains_key("error") {
        return Ok(ProfileResponse::passthrough(claims));
    }

    match claims.get("aud").and_then(Value::as_str) {
        Some(aud) if aud == client_id => {}
        Some(_) => return Err(VerifyError::ClientMismatch),
        None => {
            return Err(VerifyError::InvalidResponse(
                "Missing aud claim".to_string(),
            ));
        }
    }

    if !email_verified(claims.get("email_verified")) {
        return Err(VerifyError::UnverifiedEmail);
    }

    let id = claims
        .get("sub")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| VerifyError::InvalidResponse("Missing sub claim".to_string()))?;

    // email moves into the canonical field so the flattened claims do not
    // repeat the key on serialization.
    let email = match claims.remove("email") {
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            claims.insert("email".to_string(), other);
            None
        }
        None => None,
    };

    let first_name = claims
        .get("given_name")
        .and_then(Value::as_str)
        .map(str::to_owned);
    let last_name = claims
        .get("family_name")
        .and_then(Value::as_str)
        .map(str::to_owned);

    Ok(ProfileResponse {
        id: Some(id),
        email,
        first_name,
        last_name,
        error: None,
        claims,
    })
}

/// Google's tokeninfo endpoint reports `email_verified` as the string
/// `"true"`; the boolean form is accepted as well. Anything else, including an
/// absent claim, counts as unverified.
fn email_verified(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(s)) => s == "true",
        Some(Value::Bool(b)) => *b,
        _ => false,
    }
}
