use axum::Json;
use http::{Result as HttpResponse, StatusCode};
use social_login::{ProfileResponse, VerifyError};

/// Error half of a handler result: a status code plus the structured error
/// body the relay and host understand.
pub type ErrorResponse = (StatusCode, Json<ProfileResponse>);

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, ErrorResponse>;
}

/// Implementation for VerifyError to map kinds to appropriate status codes.
/// The body always carries the structured `error` field, so a host inspecting
/// only the JSON sees the same taxonomy regardless of transport.
impl<T> IntoResponseError<T> for Result<T, VerifyError> {
    fn into_response_error(self) -> Result<T, ErrorResponse> {
        self.map_err(|e| {
            let status = match e {
                VerifyError::MissingCredential(_) => StatusCode::BAD_REQUEST,
                VerifyError::Unsupported(_) => StatusCode::NOT_FOUND,
                VerifyError::ClientMismatch => StatusCode::UNAUTHORIZED,
                VerifyError::UnverifiedEmail => StatusCode::UNAUTHORIZED,
                VerifyError::Transport(_) => StatusCode::BAD_GATEWAY,
                VerifyError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            };
            (status, Json(ProfileResponse::from(&e)))
        })
    }
}

/// Implementation for http::Error (used by Response::builder())
impl<T> IntoResponseError<T> for HttpResponse<T> {
    fn into_response_error(self) -> Result<T, ErrorResponse> {
        self.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ProfileResponse::failure("internal_error")),
            )
        })
    }
}
