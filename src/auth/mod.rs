//! Authentication — domain binding, challenge generation, token signing.
//!
//! ## Security Model
//!
//! - **Stateless**: there is no login and no server-side session. Every admin
//!   action signs a fresh challenge and sends the resulting [`AuthToken`] as a
//!   `Bearer` credential. Tokens are never stored, cached, or reused.
//! - **Opaque**: the SDK builds the token but never parses it afterwards. The
//!   backend recovers the signer from the signature and checks the domain
//!   binding and the expiration.
//! - **Wallet-agnostic**: signing goes through the [`Signer`] trait. Browser
//!   wallets, hardware devices, and the native [`LocalSigner`](native::LocalSigner)
//!   all plug in the same way.
//!
//! ## Flow
//!
//! ```rust,ignore
//! let options = TokenOptions::new("admin.example.com");
//! let token = sign_auth_message(&signer, &options).await?;
//! let outcome = http.dispatch(&AdminAction::hide("v1"), &token).await;
//! ```

pub mod domain;
pub mod message;
pub mod token;

#[cfg(feature = "native-auth")]
pub mod native;

use async_trait::async_trait;

use crate::error::SignerError;
use crate::shared::WalletAddress;

pub use domain::normalize_domain;
pub use message::ChallengeMessage;
pub use token::{sign_auth_message, AuthToken, TokenOptions};

/// A wallet signing capability owned by the surrounding application.
///
/// Borrowed for the duration of one signing call. Implementations may suspend
/// for as long as the holder needs to approve the request; the SDK applies no
/// timeout to either method.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Signer {
    /// Addresses currently exposed by the wallet. The first one is the active address.
    async fn addresses(&self) -> Result<Vec<WalletAddress>, SignerError>;

    /// Sign `message` with the active address and return the encoded signature.
    async fn sign_message(&self, message: &str) -> Result<String, SignerError>;
}

/// Resolve the active address of `signer`.
///
/// Returns `None` when the wallet exposes no address, the active one is blank,
/// or the lookup itself fails.
pub async fn resolve_address<S: Signer + ?Sized>(signer: &S) -> Option<WalletAddress> {
    match signer.addresses().await {
        Ok(addresses) => addresses.into_iter().next().filter(|a| !a.is_empty()),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to look up wallet addresses");
            None
        }
    }
}
