//! # Vault Admin SDK
//!
//! Wallet-signed administration of backend-tracked vaults, for native and
//! WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, admin actions and outcomes (always available, WASM-safe)
//! 2. **Auth** — Domain normalization, challenge generation, token signing via [`auth::Signer`]
//! 3. **HTTP API** — `AdminHttp`, one stateless request per action
//! 4. **High-Level Client** — `VaultAdminClient` with a per-resource in-flight guard
//!
//! There is no session: every action signs a fresh, short-lived token and
//! attaches it as a bearer credential.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vault_admin_sdk::prelude::*;
//!
//! let client = VaultAdminClient::builder()
//!     .base_url("https://api.example.com")
//!     .auth_domain("https://app.example.com")
//!     .build()?;
//!
//! let outcome = client.admin().hide(&wallet, &ResourceId::new("vault-1")).await?;
//! println!("{}", outcome.message());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all modules.
pub mod shared;

/// Domain modules: admin actions, outcomes, wire types.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants and endpoint paths.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: domain binding, challenge generation, token signing.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Stateless HTTP dispatcher.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `VaultAdminClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{ResourceId, WalletAddress};

    // Domain types — admin
    pub use crate::domain::admin::{
        ActionKind, ActionMethod, ActionOutcome, AdminAction, InFlightGuard, InFlightSet,
    };

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError, SignerError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth
    pub use crate::auth::{
        normalize_domain, sign_auth_message, AuthToken, ChallengeMessage, Signer, TokenOptions,
    };
    #[cfg(feature = "native-auth")]
    pub use crate::auth::native::LocalSigner;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{AdminClient, VaultAdminClient, VaultAdminClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::http::AdminHttp;
}
