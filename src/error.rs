//! Unified SDK error types.

use thiserror::Error;

use crate::shared::ResourceId;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("An admin action is already in flight for resource {0}")]
    ActionInFlight(ResourceId),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// HTTP-layer errors.
///
/// Only transport-level failures live here: every HTTP status, including
/// 4xx/5xx, is classified into an [`ActionOutcome`](crate::domain::admin::ActionOutcome).
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Timeout")]
    Timeout,
}

/// Authentication errors raised while producing a token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("No wallet connected")]
    NoWalletConnected,

    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

/// Errors reported by a [`Signer`](crate::auth::Signer) implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignerError {
    #[error("Request rejected by the wallet holder")]
    Rejected,

    #[error("Wallet unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Other(String),
}
