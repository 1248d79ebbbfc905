//! Admin sub-client — sign, guard, and dispatch vault actions.

use crate::auth::{sign_auth_message, Signer};
use crate::client::VaultAdminClient;
use crate::domain::admin::{ActionOutcome, AdminAction};
use crate::error::SdkError;
use crate::shared::ResourceId;

/// Sub-client for admin operations.
///
/// Each call performs a fresh signature followed by exactly one request.
/// Overlapping calls on the same resource id are rejected with
/// [`SdkError::ActionInFlight`] before anything is signed or sent.
pub struct Admin<'a> {
    pub(crate) client: &'a VaultAdminClient,
}

impl<'a> Admin<'a> {
    /// Sign a token with `signer` and dispatch `action`.
    ///
    /// Signing failures short-circuit as [`SdkError::Auth`]; the dispatcher
    /// is never reached without a token. Every HTTP result, transport
    /// failures included, comes back as an [`ActionOutcome`].
    pub async fn perform<S: Signer + ?Sized>(
        &self,
        signer: &S,
        action: AdminAction,
    ) -> Result<ActionOutcome, SdkError> {
        let _guard = self
            .client
            .in_flight
            .try_acquire(action.resource_id())
            .ok_or_else(|| {
                tracing::warn!(action = %action, "Admin action already in flight");
                SdkError::ActionInFlight(action.resource_id().clone())
            })?;

        let token = sign_auth_message(signer, &self.client.token_options).await?;
        let outcome = self.client.http.dispatch(&action, &token).await;
        Ok(outcome)
    }

    pub async fn hide<S: Signer + ?Sized>(
        &self,
        signer: &S,
        id: &ResourceId,
    ) -> Result<ActionOutcome, SdkError> {
        self.perform(signer, AdminAction::Hide(id.clone())).await
    }

    pub async fn show<S: Signer + ?Sized>(
        &self,
        signer: &S,
        id: &ResourceId,
    ) -> Result<ActionOutcome, SdkError> {
        self.perform(signer, AdminAction::Show(id.clone())).await
    }

    pub async fn archive<S: Signer + ?Sized>(
        &self,
        signer: &S,
        id: &ResourceId,
    ) -> Result<ActionOutcome, SdkError> {
        self.perform(signer, AdminAction::Archive(id.clone())).await
    }

    /// Show the vault if it is currently hidden, hide it otherwise.
    pub async fn toggle_visibility<S: Signer + ?Sized>(
        &self,
        signer: &S,
        id: &ResourceId,
        currently_hidden: bool,
    ) -> Result<ActionOutcome, SdkError> {
        self.perform(signer, AdminAction::toggle_visibility(id.clone(), currently_hidden))
            .await
    }

    /// Whether an action on `id` is currently in flight through this client.
    pub fn is_in_flight(&self, id: &ResourceId) -> bool {
        self.client.in_flight.contains(id)
    }
}
