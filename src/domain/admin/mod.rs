//! Admin domain — vault visibility and archival actions.
//!
//! Hide, show, and archive are one [`AdminAction`] enum consumed by a single
//! dispatch routine. Each variant carries its own method/path/success-code
//! row, so the response classification never depends on the status code
//! alone (hide and show both report success with 2xx codes but mean opposite
//! things).

#[cfg(feature = "http")]
pub mod client;
pub mod guard;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::network::{ARCHIVE_VAULT_PATH, HIDE_VAULTS_PATH};
use crate::shared::ResourceId;

pub use guard::{InFlightGuard, InFlightSet};
pub use wire::ResourceIdRequest;

// ============================================================================
// Actions
// ============================================================================

/// HTTP method used by an admin endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionMethod {
    Post,
    Delete,
}

impl ActionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A single administrative mutation on one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    Hide(ResourceId),
    Show(ResourceId),
    Archive(ResourceId),
}

impl AdminAction {
    pub fn hide(id: impl Into<ResourceId>) -> Self {
        Self::Hide(id.into())
    }

    pub fn show(id: impl Into<ResourceId>) -> Self {
        Self::Show(id.into())
    }

    pub fn archive(id: impl Into<ResourceId>) -> Self {
        Self::Archive(id.into())
    }

    /// Show when currently hidden, hide otherwise.
    pub fn toggle_visibility(id: impl Into<ResourceId>, currently_hidden: bool) -> Self {
        if currently_hidden {
            Self::Show(id.into())
        } else {
            Self::Hide(id.into())
        }
    }

    pub fn resource_id(&self) -> &ResourceId {
        match self {
            Self::Hide(id) | Self::Show(id) | Self::Archive(id) => id,
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Hide(_) => ActionKind::Hidden,
            Self::Show(_) => ActionKind::Shown,
            Self::Archive(_) => ActionKind::Archived,
        }
    }

    pub fn method(&self) -> ActionMethod {
        match self {
            Self::Hide(_) | Self::Archive(_) => ActionMethod::Post,
            Self::Show(_) => ActionMethod::Delete,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Hide(_) | Self::Show(_) => HIDE_VAULTS_PATH,
            Self::Archive(_) => ARCHIVE_VAULT_PATH,
        }
    }

    /// The one status code the backend uses to report success for this action.
    pub fn success_status(&self) -> u16 {
        match self {
            Self::Hide(_) | Self::Archive(_) => 201,
            Self::Show(_) => 200,
        }
    }

    /// Request body: always exactly `{"id": "<resource id>"}`.
    pub fn request_body(&self) -> ResourceIdRequest {
        ResourceIdRequest {
            id: self.resource_id().clone(),
        }
    }

    /// Outcome decided by the status code alone. `None` means the response
    /// body is needed to build a [`ActionOutcome::ServerError`].
    pub fn classify_status(&self, status: u16) -> Option<ActionOutcome> {
        if status == self.success_status() {
            Some(ActionOutcome::Success(self.kind()))
        } else if status == 401 {
            Some(ActionOutcome::Unauthorized)
        } else {
            None
        }
    }

    /// Classify this action's response.
    pub fn classify(&self, status: u16, body: String) -> ActionOutcome {
        self.classify_status(status)
            .unwrap_or(ActionOutcome::ServerError { status, body })
    }
}

impl std::fmt::Display for AdminAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            Self::Hide(_) => "hide",
            Self::Show(_) => "show",
            Self::Archive(_) => "archive",
        };
        write!(f, "{} {}", verb, self.resource_id())
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// What a successful action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Hidden,
    Shown,
    Archived,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Shown => "shown",
            Self::Archived => "archived",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of exactly one admin request. Never merged across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Success(ActionKind),
    /// Signer not on the backend's admin allow-list, or the token was
    /// invalid, expired, or bound to another domain.
    Unauthorized,
    ServerError { status: u16, body: String },
    /// DNS, connection, or timeout failure; no HTTP status was received.
    TransportFailure(String),
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Human-readable notification text for the caller's UI.
    pub fn message(&self) -> String {
        match self {
            Self::Success(ActionKind::Hidden) => "Vault hidden.".to_string(),
            Self::Success(ActionKind::Shown) => "Vault shown.".to_string(),
            Self::Success(ActionKind::Archived) => "Vault is archived successfully.".to_string(),
            Self::Unauthorized => {
                "Your address is not in the admin list or token is invalid.".to_string()
            }
            Self::ServerError { status, body } => format!("Server error: {}. {}", status, body),
            Self::TransportFailure(_) => "Failed to connect to server.".to_string(),
        }
    }
}

impl std::fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(id: &str) -> [AdminAction; 3] {
        [
            AdminAction::hide(id),
            AdminAction::show(id),
            AdminAction::archive(id),
        ]
    }

    #[test]
    fn test_endpoint_table() {
        let hide = AdminAction::hide("v1");
        assert_eq!(hide.method(), ActionMethod::Post);
        assert_eq!(hide.path(), "/api/hide-vaults");
        assert_eq!(hide.success_status(), 201);

        let show = AdminAction::show("v1");
        assert_eq!(show.method(), ActionMethod::Delete);
        assert_eq!(show.path(), "/api/hide-vaults");
        assert_eq!(show.success_status(), 200);

        let archive = AdminAction::archive("v1");
        assert_eq!(archive.method(), ActionMethod::Post);
        assert_eq!(archive.path(), "/api/archived-vaults/archive");
        assert_eq!(archive.success_status(), 201);
    }

    #[test]
    fn test_request_body_is_only_id() {
        for action in all("vault-9") {
            let json = serde_json::to_value(action.request_body()).unwrap();
            assert_eq!(json, serde_json::json!({ "id": "vault-9" }));
        }
    }

    #[test]
    fn test_classify_by_action_not_status() {
        // 200 means "shown" only for Show; for Hide it is unexpected.
        assert_eq!(
            AdminAction::show("v1").classify(200, String::new()),
            ActionOutcome::Success(ActionKind::Shown)
        );
        assert_eq!(
            AdminAction::hide("v1").classify(200, "ok".to_string()),
            ActionOutcome::ServerError {
                status: 200,
                body: "ok".to_string()
            }
        );
        assert_eq!(
            AdminAction::hide("v1").classify(201, String::new()),
            ActionOutcome::Success(ActionKind::Hidden)
        );
        assert_eq!(
            AdminAction::archive("v1").classify(201, String::new()),
            ActionOutcome::Success(ActionKind::Archived)
        );
    }

    #[test]
    fn test_classify_unauthorized_needs_no_body() {
        for action in all("v1") {
            assert_eq!(action.classify_status(401), Some(ActionOutcome::Unauthorized));
            assert_eq!(action.classify_status(500), None);
        }
    }

    #[test]
    fn test_toggle_visibility() {
        assert_eq!(
            AdminAction::toggle_visibility("v1", true),
            AdminAction::show("v1")
        );
        assert_eq!(
            AdminAction::toggle_visibility("v1", false),
            AdminAction::hide("v1")
        );
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            ActionOutcome::Success(ActionKind::Hidden).message(),
            "Vault hidden."
        );
        assert_eq!(
            ActionOutcome::ServerError {
                status: 500,
                body: "boom".to_string()
            }
            .message(),
            "Server error: 500. boom"
        );
        assert!(!ActionOutcome::Unauthorized.is_success());
    }
}
