use std::sync::Arc;

use social_login::Configuration;

use crate::nonce::NonceValidator;

/// Shared state injected into the router: the verification settings plus the
/// host's nonce validator. No ambient globals.
#[derive(Clone)]
pub struct AuthState {
    pub config: Arc<Configuration>,
    pub nonce: Arc<dyn NonceValidator>,
}

impl AuthState {
    pub fn new(config: Configuration, nonce: Arc<dyn NonceValidator>) -> Self {
        Self {
            config: Arc::new(config),
            nonce,
        }
    }
}
