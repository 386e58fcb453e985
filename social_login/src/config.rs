use std::collections::HashSet;
use std::env;
use std::time::Duration;

use crate::errors::ConfigError;
use crate::types::Authenticator;

const DEFAULT_GOOGLE_TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";
const DEFAULT_FACEBOOK_GRAPH_URL: &str = "https://graph.facebook.com";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Process-wide verification settings, loaded once at startup and passed
/// explicitly into [`crate::verify`]. There is no ambient lookup.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Authenticators enabled for this deployment.
    pub auth_methods: HashSet<Authenticator>,
    /// Expected `aud` claim of Google ID tokens.
    pub google_client_id: String,
    /// Google tokeninfo endpoint; overridable for tests.
    pub google_tokeninfo_url: String,
    /// Facebook Graph API base URL; overridable for tests.
    pub facebook_graph_url: String,
    /// Outbound call timeout. The upstream implementation had none and could
    /// block a request thread indefinitely.
    pub request_timeout: Duration,
}

impl Configuration {
    pub fn new(google_client_id: impl Into<String>) -> Self {
        Self {
            auth_methods: HashSet::from([Authenticator::Google, Authenticator::Facebook]),
            google_client_id: google_client_id.into(),
            google_tokeninfo_url: DEFAULT_GOOGLE_TOKENINFO_URL.to_string(),
            facebook_graph_url: DEFAULT_FACEBOOK_GRAPH_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Loads settings from the environment.
    ///
    /// - `AUTH_METHODS`: comma-separated authenticator keys (default: all)
    /// - `GOOGLE_CLIENT_ID`: required when `google` is enabled
    /// - `GOOGLE_TOKENINFO_URL`, `FACEBOOK_GRAPH_URL`: endpoint overrides
    /// - `AUTH_REQUEST_TIMEOUT`: seconds, default 5
    pub fn from_env() -> Result<Self, ConfigError> {
        let auth_methods = match env::var("AUTH_METHODS") {
            Ok(value) => parse_auth_methods(&value)?,
            Err(_) => HashSet::from([Authenticator::Google, Authenticator::Facebook]),
        };

        let google_client_id = match env::var("GOOGLE_CLIENT_ID") {
            Ok(value) => value,
            Err(_) if auth_methods.contains(&Authenticator::Google) => {
                return Err(ConfigError::MissingEnv("GOOGLE_CLIENT_ID".to_string()));
            }
            Err(_) => String::new(),
        };

        let request_timeout = match env::var("AUTH_REQUEST_TIMEOUT") {
            Ok(value) => parse_timeout(&value)?,
            Err(_) => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            auth_methods,
            google_client_id,
            google_tokeninfo_url: env::var("GOOGLE_TOKENINFO_URL")
                .unwrap_or_else(|_| DEFAULT_GOOGLE_TOKENINFO_URL.to_string()),
            facebook_graph_url: env::var("FACEBOOK_GRAPH_URL")
                .unwrap_or_else(|_| DEFAULT_FACEBOOK_GRAPH_URL.to_string()),
            request_timeout,
        })
    }

    /// Whether an authenticator is usable: it must be in the enabled list, and
    /// Google additionally needs a configured client id.
    pub fn enabled(&self, authenticator: Authenticator) -> bool {
        if !self.auth_methods.contains(&authenticator) {
            return false;
        }
        match authenticator {
            Authenticator::Google => !self.google_client_id.is_empty(),
            Authenticator::Facebook => true,
        }
    }
}

fn parse_auth_methods(value: &str) -> Result<HashSet<Authenticator>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(|key| {
            key.parse::<Authenticator>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "AUTH_METHODS".to_string(),
                    value: key.to_string(),
                })
        })
        .collect()
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    value
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidValue {
            name: "AUTH_REQUEST_TIMEOUT".to_string(),
            value: value.to_string(),
        })
}
