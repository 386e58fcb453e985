//! Local mock provider standing in for Google's tokeninfo endpoint and the
//! Facebook Graph API, so verification flows can run end-to-end without
//! network access.

use axum::{Router, extract::Query, response::IntoResponse, routing::get};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;

pub const MOCK_CLIENT_ID: &str = "CID";

async fn tokeninfo(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let body = match params.get("id_token").map(String::as_str) {
        Some("good-token") => json!({
            "sub": "123",
            "aud": MOCK_CLIENT_ID,
            "email": "a@b.com",
            "email_verified": "true",
            "given_name": "A",
            "family_name": "B"
        }),
        Some("wrong-audience") => json!({
            "sub": "123",
            "aud": "SOMEONE_ELSE",
            "email": "a@b.com",
            "email_verified": "true"
        }),
        Some("unverified-email") => json!({
            "sub": "123",
            "aud": MOCK_CLIENT_ID,
            "email": "a@b.com",
            "email_verified": "false"
        }),
        Some("not-json") => return "<html>gateway error</html>".into_response(),
        _ => json!({"error": "invalid_token"}),
    };
    axum::Json(body).into_response()
}

async fn graph_me(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let body = match params.get("access_token").map(String::as_str) {
        Some("good-token") => json!({
            "id": "10203040",
            "email": "a@b.com",
            "first_name": "A",
            "last_name": "B"
        }),
        _ => json!({
            "error": {
                "message": "Invalid OAuth access token.",
                "type": "OAuthException",
                "code": 190
            }
        }),
    };
    axum::Json(body).into_response()
}

/// Spawns the mock provider on an ephemeral port and returns its address.
pub async fn spawn_mock_provider() -> SocketAddr {
    let app = Router::new()
        .route("/tokeninfo", get(tokeninfo))
        .route("/me", get(graph_me));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock provider");
    let addr = listener.local_addr().expect("Mock provider has no address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Mock provider stopped");
    });

    addr
}

/// Reserves a port nothing listens on, for transport-failure tests.
pub async fn unreachable_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let addr = listener.local_addr().expect("Throwaway listener has no address");
    drop(listener);
    addr
}
