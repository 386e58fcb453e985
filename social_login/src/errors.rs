use thiserror::Error;

/// Failure kinds of a single verification attempt.
///
/// These are surfaced to callers of [`crate::verify`] as the structured `error`
/// field of a [`crate::ProfileResponse`], never as a panic. Transport failures
/// and malformed provider responses are distinct kinds; the upstream
/// implementation conflated them with "verified but empty".
#[derive(Debug, Error, Clone)]
pub enum VerifyError {
    #[error("Missing credential for {0}")]
    MissingCredential(String),

    #[error("Unsupported authenticator: {0}")]
    Unsupported(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Client id mismatch")]
    ClientMismatch,

    #[error("Email not verified by provider")]
    UnverifiedEmail,
}

impl VerifyError {
    /// Wire code carried in the `error` field of a failed response.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCredential(_) => "invalid_request",
            Self::Unsupported(_) => "unsupported_authenticator",
            Self::Transport(_) => "provider_unreachable",
            Self::InvalidResponse(_) => "invalid_response",
            Self::ClientMismatch => "invalid_client",
            Self::UnverifiedEmail => "unverified_email",
        }
    }
}

#[derive(Debug, Error, Clone)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}
