//! Router for the social-login endpoints

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AuthState;

/// Create the router for the social-login endpoints.
///
/// Mounted under [`crate::SL_ROUTE_PREFIX`] the endpoints are:
/// - `POST {prefix}/{authenticator}` — credential verification
/// - `GET {prefix}/login` — standalone login page
/// - `GET {prefix}/login.js` — client credential relay script
pub fn social_login_router(state: AuthState) -> Router {
    Router::new()
        .route("/login", get(super::pages::login))
        .route("/login.js", get(super::handlers::serve_login_js))
        .route("/{authenticator}", post(super::handlers::authenticate))
        .with_state(state)
}
