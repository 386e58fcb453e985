//! Central configuration for the social_login_axum crate

use std::sync::LazyLock;

/// Prefix the authentication routes are mounted under.
/// Default: "/auth"
pub static SL_ROUTE_PREFIX: LazyLock<String> =
    LazyLock::new(|| std::env::var("SL_ROUTE_PREFIX").unwrap_or_else(|_| "/auth".to_string()));
