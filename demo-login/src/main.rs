use std::sync::Arc;

use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use social_login::Configuration;
use social_login_axum::{AcceptAll, AuthState, SL_ROUTE_PREFIX, social_login_router};

mod handlers;
mod server;

use crate::{handlers::index, server::spawn_http_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Configuration::from_env()?;
    tracing::info!("Enabled authenticators: {:?}", config.auth_methods);

    // The demo accepts any nonce; a real host wires in its own validator.
    let state = AuthState::new(config, Arc::new(AcceptAll));

    let app = Router::new()
        .route("/", get(index))
        .nest(SL_ROUTE_PREFIX.as_str(), social_login_router(state));

    let http_server = spawn_http_server(3001, app);
    http_server.await?;
    Ok(())
}
