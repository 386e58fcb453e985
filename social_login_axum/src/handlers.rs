use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde_json::json;

use social_login::{Authenticator, ProfileResponse, VerificationRequest, try_verify};

use crate::error::{ErrorResponse, IntoResponseError};
use crate::state::AuthState;

/// Header carrying the host-issued nonce, set by the client relay.
pub(super) const NONCE_HEADER: &str = "x-auth-nonce";

/// Handler for the internal authentication endpoint the relay posts to.
///
/// A verified profile is wrapped in a `data` envelope, the shape the relay's
/// reload check recognizes. Provider-reported failures keep their original
/// mapping under a 401 so the host sees the structured `error` field.
pub(super) async fn authenticate(
    State(state): State<AuthState>,
    Path(authenticator): Path<String>,
    headers: HeaderMap,
    Json(request): Json<VerificationRequest>,
) -> Result<Response, ErrorResponse> {
    let nonce = headers
        .get(NONCE_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();
    if !state.nonce.validate(nonce) {
        tracing::warn!("Rejected authentication request with invalid nonce");
        return Err((
            StatusCode::FORBIDDEN,
            Json(ProfileResponse::failure("invalid_nonce")),
        ));
    }

    let authenticator = authenticator.parse::<Authenticator>().into_response_error()?;
    if request.authenticator != authenticator {
        tracing::warn!(
            "Authenticator mismatch: path {authenticator}, body {}",
            request.authenticator
        );
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ProfileResponse::failure("invalid_request")),
        ));
    }

    let profile = try_verify(&request, &state.config)
        .await
        .into_response_error()?;

    if profile.is_failure() {
        return Ok((StatusCode::UNAUTHORIZED, Json(profile)).into_response());
    }

    tracing::debug!("Verified {authenticator} login for profile {:?}", profile.id);
    Ok(Json(json!({ "data": profile })).into_response())
}

pub(super) async fn serve_login_js() -> Result<Response, ErrorResponse> {
    let js_content = include_str!("../static/login.js");
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "application/javascript")
        .body(js_content.to_string().into())
        .into_response_error()
}
