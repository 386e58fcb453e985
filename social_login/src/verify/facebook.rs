use serde_json::{Map, Value};

use crate::config::Configuration;
use crate::errors::VerifyError;
use crate::types::ProfileResponse;

use super::utils::get_client;

const GRAPH_PROFILE_FIELDS: &str = "id,email,first_name,last_name";

/// Verifies a Facebook access token by fetching the profile it grants access
/// to. The Graph API already returns the canonical field names, so no claim
/// mapping is needed beyond error handling.
pub(super) async fn verify_access_token(
    access_token: &str,
    config: &Configuration,
) -> Result<ProfileResponse, VerifyError> {
    let client = get_client(config.request_timeout);
    let response = client
        .get(format!("{}/me", config.facebook_graph_url))
        .query(&[("fields", GRAPH_PROFILE_FIELDS), ("access_token", access_token)])
        .send()
        .await
        .map_err(|e| VerifyError::Transport(e.to_string()))?;

    let response_body = response
        .text()
        .await
        .map_err(|e| VerifyError::Transport(e.to_string()))?;

    tracing::debug!("Graph API response body: {:#?}", response_body);
    let fields: Map<String, Value> = serde_json::from_str(&response_body).map_err(|e| {
        VerifyError::InvalidResponse(format!("Failed to deserialize Graph API body: {e}"))
    })?;

    normalize_graph_response(fields)
}

/// Graph API errors arrive as an object under `error`; its message becomes
/// the structured error string. Anything else must at least carry an `id`.
fn normalize_graph_response(mut fields: Map<String, Value>) -> Result<ProfileResponse, VerifyError> {
    if let Some(error) = fields.remove("error") {
        let code = match &error {
            Value::String(s) => s.clone(),
            other => other
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("invalid_token")
                .to_string(),
        };
        tracing::debug!("Graph API error: {:#?}", error);
        return Ok(ProfileResponse::failure(code));
    }

    let profile = ProfileResponse::passthrough(fields);
    if profile.id.is_none() {
        return Err(VerifyError::InvalidResponse(
            "Missing id field".to_string(),
        ));
    }
    Ok(profile)
}
