//! social-login - Token verification for third-party social-login credentials
//!
//! This crate exchanges a provider-issued credential (a Google ID token or a
//! Facebook access token) for verified profile claims. Session creation, user
//! lookup and nonce validation stay with the host application; the only side
//! effect here is a single outbound HTTP call per verification.

mod config;
mod errors;
mod types;
mod verify;

pub use config::Configuration;
pub use errors::{ConfigError, VerifyError};
pub use types::{Authenticator, ProfileResponse, VerificationRequest};
pub use verify::{try_verify, verify};
