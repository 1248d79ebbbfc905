//! Token signing — turns a [`Signer`] into a short-lived, domain-bound bearer token.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::auth::domain::normalize_domain;
use crate::auth::message::ChallengeMessage;
use crate::auth::{resolve_address, Signer};
use crate::error::AuthError;

/// Default token lifetime (one day).
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Opaque signed credential attached as `Authorization: Bearer <token>`.
///
/// Created for a single request and dropped right after, so it is not `Clone`.
/// `Debug` output never reveals the value.
#[derive(PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a token produced elsewhere (e.g. by a browser-side signer).
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthToken(<redacted, {} bytes>)", self.0.len())
    }
}

/// Parameters of the challenge bound into each token.
#[derive(Debug, Clone)]
pub struct TokenOptions {
    /// Base URL or bare domain; normalized before signing.
    pub domain: String,
    pub statement: Option<String>,
    pub uri: Option<String>,
    /// Fixed nonce. A random one is drawn per token when unset.
    pub nonce: Option<u64>,
    pub ttl: Duration,
    /// Fixed issuance time. `Utc::now()` per token when unset.
    pub issued_at: Option<DateTime<Utc>>,
}

impl TokenOptions {
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            statement: None,
            uri: None,
            nonce: None,
            ttl: DEFAULT_TOKEN_TTL,
            issued_at: None,
        }
    }

    pub fn statement(mut self, statement: &str) -> Self {
        self.statement = Some(statement.to_string());
        self
    }

    pub fn uri(mut self, uri: &str) -> Self {
        self.uri = Some(uri.to_string());
        self
    }

    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn issued_at(mut self, issued_at: DateTime<Utc>) -> Self {
        self.issued_at = Some(issued_at);
        self
    }

    /// Build the challenge for a single signing attempt.
    pub fn challenge(&self) -> Result<ChallengeMessage, AuthError> {
        let issued_at = self.issued_at.unwrap_or_else(Utc::now);
        let expires_at = TimeDelta::from_std(self.ttl)
            .ok()
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .ok_or_else(|| AuthError::SigningFailed("token lifetime out of range".to_string()))?;

        Ok(ChallengeMessage {
            domain: normalize_domain(&self.domain),
            statement: self.statement.clone(),
            uri: self.uri.clone(),
            nonce: self.nonce.unwrap_or_else(|| u64::from(rand::random::<u32>())),
            issued_at,
            expires_at,
        })
    }
}

#[derive(Serialize)]
struct TokenEnvelope<'a> {
    signature: &'a str,
    body: &'a str,
}

/// Produce a signed, domain-bound token with `signer`.
///
/// 1. Resolve the active address; none → [`AuthError::NoWalletConnected`]
///    (the signer is never asked to sign).
/// 2. Normalize the domain and render the challenge.
/// 3. Ask the signer to sign it. Rejection, failure, or an empty signature →
///    [`AuthError::SigningFailed`].
/// 4. Assemble the token.
///
/// Single attempt, no retries. May suspend for as long as the signer needs
/// (typically human approval); no timeout is applied.
pub async fn sign_auth_message<S: Signer + ?Sized>(
    signer: &S,
    options: &TokenOptions,
) -> Result<AuthToken, AuthError> {
    let address = match resolve_address(signer).await {
        Some(address) => address,
        None => {
            tracing::error!("No wallet connected, cannot sign auth message");
            return Err(AuthError::NoWalletConnected);
        }
    };

    let challenge = options.challenge()?;
    tracing::debug!(
        address = %address,
        domain = %challenge.domain,
        "Signing auth message"
    );

    let body = challenge.render();
    let signature = signer.sign_message(&body).await.map_err(|e| {
        tracing::error!(error = %e, "Signer failed to sign auth message");
        AuthError::SigningFailed(e.to_string())
    })?;

    if signature.trim().is_empty() {
        tracing::error!("Signer returned an empty signature");
        return Err(AuthError::SigningFailed("empty signature".to_string()));
    }

    let token = assemble_token(&signature, &body)?;
    if token.is_empty() {
        tracing::error!("Token assembly produced an empty token");
        return Err(AuthError::SigningFailed("empty token".to_string()));
    }

    tracing::debug!(len = token.len(), "Auth token generated");
    Ok(token)
}

/// Base64 of `{"signature": ..., "body": ...}`.
fn assemble_token(signature: &str, body: &str) -> Result<AuthToken, AuthError> {
    let json = serde_json::to_vec(&TokenEnvelope { signature, body })
        .map_err(|e| AuthError::SigningFailed(e.to_string()))?;
    Ok(AuthToken(STANDARD.encode(json)))
}
