use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::errors::VerifyError;

/// Identity-provider integration identified by a string key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Authenticator {
    Google,
    Facebook,
}

impl Authenticator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }

    /// Name of the credential field the provider's SDK produces.
    ///
    /// Google Identity Services hands back a JWT ID token; the Facebook SDK
    /// hands back an OAuth access token.
    pub fn token_field(&self) -> &'static str {
        match self {
            Self::Google => "id_token",
            Self::Facebook => "access_token",
        }
    }
}

impl fmt::Display for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Authenticator {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Self::Google),
            "facebook" => Ok(Self::Facebook),
            _ => Err(VerifyError::Unsupported(s.to_string())),
        }
    }
}

/// One login attempt's worth of input: the authenticator key plus the
/// credential field its SDK produced. Built client-side, sent once, never
/// retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub authenticator: Authenticator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl VerificationRequest {
    pub fn google(id_token: impl Into<String>) -> Self {
        Self {
            authenticator: Authenticator::Google,
            id_token: Some(id_token.into()),
            access_token: None,
        }
    }

    pub fn facebook(access_token: impl Into<String>) -> Self {
        Self {
            authenticator: Authenticator::Facebook,
            id_token: None,
            access_token: Some(access_token.into()),
        }
    }

    /// The provider-appropriate credential, if present and non-empty.
    pub fn credential(&self) -> Option<&str> {
        let token = match self.authenticator {
            Authenticator::Google => self.id_token.as_deref(),
            Authenticator::Facebook => self.access_token.as_deref(),
        };
        token.filter(|t| !t.is_empty())
    }
}

/// Normalized result of a verification attempt.
///
/// Canonical identity fields are populated on success; `error` is set on any
/// failure. Provider claims that are not lifted into a canonical field are
/// retained in `claims` and flattened back into the serialized mapping, so a
/// successful response carries `sub`, `aud`, `given_name` etc. alongside the
/// mapped `id`, `first_name`, `last_name`.
///
/// Invariant: when `error` is set, no identity field may be trusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub claims: Map<String, Value>,
}

impl ProfileResponse {
    /// A failed attempt carrying only the structured error code.
    pub fn failure(code: impl Into<String>) -> Self {
        Self {
            error: Some(code.into()),
            ..Self::default()
        }
    }

    /// Wraps a provider response mapping without altering it.
    ///
    /// String values under canonical keys move into the matching field; all
    /// other entries stay in `claims`. Serializing the result reproduces the
    /// provider's mapping, which keeps provider-reported errors idempotent.
    pub fn passthrough(mut claims: Map<String, Value>) -> Self {
        let mut take_string = |key: &str| match claims.get(key) {
            Some(Value::String(_)) => match claims.remove(key) {
                Some(Value::String(s)) => Some(s),
                _ => None,
            },
            _ => None,
        };

        let id = take_string("id");
        let email = take_string("email");
        let first_name = take_string("first_name");
        let last_name = take_string("last_name");
        let error = take_string("error");

        Self {
            id,
            email,
            first_name,
            last_name,
            error,
            claims,
        }
    }

    /// Whether this response represents a failed attempt.
    ///
    /// Providers are not trusted to report errors as strings; an `error` key
    /// carrying an object or other non-string value still counts.
    pub fn is_failure(&self) -> bool {
        self.error.is_some() || self.claims.contains_key("error")
    }
}

impl From<&VerifyError> for ProfileResponse {
    fn from(err: &VerifyError) -> Self {
        Self::failure(err.code())
    }
}
