use subtle::ConstantTimeEq;

/// Seam for the host's CSRF/nonce system.
///
/// The relay sends the nonce the host page handed it in the `X-Auth-Nonce`
/// header; the host decides what a valid nonce looks like. Nonce issuance and
/// storage are entirely the host's concern.
pub trait NonceValidator: Send + Sync {
    fn validate(&self, nonce: &str) -> bool;
}

/// Validates against a single shared secret, compared in constant time.
pub struct SharedSecretNonce {
    secret: String,
}

impl SharedSecretNonce {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl NonceValidator for SharedSecretNonce {
    fn validate(&self, nonce: &str) -> bool {
        nonce.as_bytes().ct_eq(self.secret.as_bytes()).into()
    }
}

/// Accepts every nonce. For demos and tests only.
pub struct AcceptAll;

impl NonceValidator for AcceptAll {
    fn validate(&self, _nonce: &str) -> bool {
        true
    }
}
