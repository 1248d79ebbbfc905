//! Native auth — private-key signing.
//!
//! Only available with the `native-auth` feature.

use alloy_signer::Signer as _;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;

use crate::auth::Signer;
use crate::error::SignerError;
use crate::shared::WalletAddress;

/// A [`Signer`] backed by a local secp256k1 private key.
///
/// Signs with EIP-191 `personal_sign` and returns the 65-byte signature as
/// `0x`-prefixed hex, the same encoding browser wallets produce.
pub struct LocalSigner {
    inner: PrivateKeySigner,
}

impl LocalSigner {
    pub fn new(inner: PrivateKeySigner) -> Self {
        Self { inner }
    }

    /// Parse a hex private key (with or without `0x`).
    pub fn from_hex(private_key: &str) -> Result<Self, SignerError> {
        let inner = private_key
            .trim()
            .parse::<PrivateKeySigner>()
            .map_err(|e| SignerError::Other(format!("invalid private key: {}", e)))?;
        Ok(Self { inner })
    }

    /// A signer with a freshly generated key.
    pub fn random() -> Self {
        Self {
            inner: PrivateKeySigner::random(),
        }
    }

    pub fn address(&self) -> WalletAddress {
        WalletAddress::from(self.inner.address().to_checksum(None))
    }
}

#[async_trait]
impl Signer for LocalSigner {
    async fn addresses(&self) -> Result<Vec<WalletAddress>, SignerError> {
        Ok(vec![self.address()])
    }

    async fn sign_message(&self, message: &str) -> Result<String, SignerError> {
        let signature = self
            .inner
            .sign_message(message.as_bytes())
            .await
            .map_err(|e| SignerError::Other(e.to_string()))?;
        Ok(format!("0x{}", hex::encode(signature.as_bytes())))
    }
}
