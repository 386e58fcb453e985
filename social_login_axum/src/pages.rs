use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use social_login::Authenticator;

use crate::config::SL_ROUTE_PREFIX;
use crate::state::AuthState;

#[derive(Template)]
#[template(path = "login.j2")]
struct LoginTemplate<'a> {
    route_prefix: &'a str,
    google_client_id: &'a str,
    google_enabled: bool,
    facebook_enabled: bool,
}

/// Login page: a provider button per enabled authenticator plus the relay
/// initialization snippet. The host's own login form normally embeds the same
/// pieces; this page is the standalone rendition.
pub(super) async fn login(State(state): State<AuthState>) -> Result<Response, (StatusCode, String)> {
    let template = LoginTemplate {
        route_prefix: SL_ROUTE_PREFIX.as_str(),
        google_client_id: &state.config.google_client_id,
        google_enabled: state.config.enabled(Authenticator::Google),
        facebook_enabled: state.config.enabled(Authenticator::Facebook),
    };
    let html = Html(
        template
            .render()
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?,
    );
    Ok(html.into_response())
}
