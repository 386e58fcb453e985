mod facebook;
mod google;
mod utils;

use crate::config::Configuration;
use crate::errors::VerifyError;
use crate::types::{Authenticator, ProfileResponse, VerificationRequest};

/// Verifies a provider credential and returns the normalized profile.
///
/// `Ok` responses may still carry a provider-reported `error` (an invalid or
/// expired credential passed through unchanged); `Err` covers this system's
/// own failure kinds. One outbound HTTP call, no retries, no local mutation.
pub async fn try_verify(
    request: &VerificationRequest,
    config: &Configuration,
) -> Result<ProfileResponse, VerifyError> {
    let authenticator = request.authenticator;

    if !config.enabled(authenticator) {
        return Err(VerifyError::Unsupported(authenticator.to_string()));
    }

    let credential = request
        .credential()
        .ok_or_else(|| VerifyError::MissingCredential(authenticator.to_string()))?;

    let profile = match authenticator {
        Authenticator::Google => google::verify_id_token(credential, config).await?,
        Authenticator::Facebook => facebook::verify_access_token(credential, config).await?,
    };

    if let Some(code) = &profile.error {
        tracing::debug!("Provider-reported failure for {authenticator}: {code}");
    }

    Ok(profile)
}

/// [`try_verify`] with every failure kind folded into the structured `error`
/// field, matching the inbound API contract: callers treat presence of
/// `error` as authentication failure, nothing is thrown.
pub async fn verify(request: &VerificationRequest, config: &Configuration) -> ProfileResponse {
    match try_verify(request, config).await {
        Ok(profile) => profile,
        Err(err) => {
            tracing::warn!("Verification failed for {}: {err}", request.authenticator);
            ProfileResponse::from(&err)
        }
    }
}
