//! Axum integration for the social-login verification library.
//!
//! Exposes the internal authentication endpoint the client relay posts
//! provider credentials to, plus a login page and the relay script itself.
//! Session creation stays with the host application; this crate stops at the
//! verified profile.

mod config;
mod error;
mod handlers;
mod nonce;
mod pages;
mod router;
mod state;

pub use config::SL_ROUTE_PREFIX;
pub use error::IntoResponseError;
pub use nonce::{AcceptAll, NonceValidator, SharedSecretNonce};
pub use router::social_login_router;
pub use state::AuthState;

// Re-export the core surface so hosts depend on one crate.
pub use social_login::{
    Authenticator, ConfigError, Configuration, ProfileResponse, VerificationRequest, VerifyError,
};
