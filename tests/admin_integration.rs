//! End-to-end tests: signer → token → dispatch → outcome, against a stub backend.
//!
//! Run with:
//! ```bash
//! cargo test -p vault-admin-sdk --test admin_integration
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tokio::sync::Notify;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vault_admin_sdk::prelude::*;

/// Signer returning `0xsig-<n>` for the n-th signature.
struct CountingSigner {
    address: Option<&'static str>,
    fail: bool,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl CountingSigner {
    fn connected() -> Self {
        Self {
            address: Some("0x00000000000000000000000000000000000000aa"),
            fail: false,
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    fn disconnected() -> Self {
        Self {
            address: None,
            ..Self::connected()
        }
    }

    fn rejecting() -> Self {
        Self {
            fail: true,
            ..Self::connected()
        }
    }

    fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::connected()
        }
    }
}

#[async_trait]
impl Signer for CountingSigner {
    async fn addresses(&self) -> Result<Vec<WalletAddress>, SignerError> {
        Ok(self.address.iter().map(|a| WalletAddress::new(a)).collect())
    }

    async fn sign_message(&self, _message: &str) -> Result<String, SignerError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail {
            return Err(SignerError::Rejected);
        }
        Ok(format!("0xsig-{}", n))
    }
}

fn client_for(server: &MockServer) -> VaultAdminClient {
    VaultAdminClient::builder()
        .base_url(&server.uri())
        .auth_domain("https://app.example.com/admin")
        .build()
        .expect("client creation")
}

async fn mount(server: &MockServer, http_method: &str, route: &str, status: u16) {
    Mock::given(method(http_method))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Decode the `Authorization` header of a received request into the token envelope.
fn envelope(request: &wiremock::Request) -> serde_json::Value {
    let header = request
        .headers
        .get("authorization")
        .expect("authorization header")
        .to_str()
        .unwrap();
    let token = header.strip_prefix("Bearer ").expect("bearer scheme");
    serde_json::from_slice(&STANDARD.decode(token).unwrap()).unwrap()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_hide_then_show_round_trip() {
    let server = MockServer::start().await;
    mount(&server, "POST", "/api/hide-vaults", 201).await;
    mount(&server, "DELETE", "/api/hide-vaults", 200).await;

    let client = client_for(&server);
    let signer = CountingSigner::connected();
    let id = ResourceId::new("v1");

    let hidden = client.admin().hide(&signer, &id).await.unwrap();
    let shown = client.admin().show(&signer, &id).await.unwrap();

    assert_eq!(hidden, ActionOutcome::Success(ActionKind::Hidden));
    assert_eq!(shown, ActionOutcome::Success(ActionKind::Shown));
    assert!(!client.admin().is_in_flight(&id));
    // One fresh signature per action.
    assert_eq!(signer.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_call_order_does_not_change_outcomes() {
    let forward = MockServer::start().await;
    let backward = MockServer::start().await;
    for server in [&forward, &backward] {
        mount(server, "POST", "/api/hide-vaults", 201).await;
        mount(server, "DELETE", "/api/hide-vaults", 200).await;
    }
    let signer = CountingSigner::connected();
    let id = ResourceId::new("v1");

    let a = client_for(&forward);
    let hide_first = a.admin().hide(&signer, &id).await.unwrap();
    let show_second = a.admin().show(&signer, &id).await.unwrap();

    let b = client_for(&backward);
    let show_first = b.admin().show(&signer, &id).await.unwrap();
    let hide_second = b.admin().hide(&signer, &id).await.unwrap();

    assert_eq!(hide_first, hide_second);
    assert_eq!(show_first, show_second);
}

#[tokio::test]
async fn test_every_action_sends_id_body_and_fresh_token() {
    let server = MockServer::start().await;
    mount(&server, "POST", "/api/hide-vaults", 201).await;
    mount(&server, "DELETE", "/api/hide-vaults", 200).await;
    mount(&server, "POST", "/api/archived-vaults/archive", 201).await;

    let client = client_for(&server);
    let signer = CountingSigner::connected();
    let id = ResourceId::new("vault-42");

    client.admin().hide(&signer, &id).await.unwrap();
    client.admin().show(&signer, &id).await.unwrap();
    client.admin().archive(&signer, &id).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);

    for (i, request) in requests.iter().enumerate() {
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body, serde_json::json!({ "id": "vault-42" }));

        // Signature n belongs to request n: never stale, never substituted.
        let envelope = envelope(request);
        assert_eq!(envelope["signature"], format!("0xsig-{}", i + 1));
        assert!(envelope["body"]
            .as_str()
            .unwrap()
            .starts_with("app.example.com wants you to sign in"));
    }
}

#[tokio::test]
async fn test_rejected_signature_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/hide-vaults"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .admin()
        .hide(&CountingSigner::rejecting(), &ResourceId::new("v1"))
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::Auth(AuthError::SigningFailed(_))));
    assert!(!client.admin().is_in_flight(&ResourceId::new("v1")));
}

#[tokio::test]
async fn test_no_wallet_short_circuits() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let signer = CountingSigner::disconnected();
    let err = client
        .admin()
        .archive(&signer, &ResourceId::new("v1"))
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::Auth(AuthError::NoWalletConnected)));
    assert_eq!(signer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_toggle_visibility_picks_endpoint() {
    let server = MockServer::start().await;
    mount(&server, "POST", "/api/hide-vaults", 201).await;
    mount(&server, "DELETE", "/api/hide-vaults", 200).await;

    let client = client_for(&server);
    let signer = CountingSigner::connected();
    let id = ResourceId::new("v1");

    let outcome = client
        .admin()
        .toggle_visibility(&signer, &id, true)
        .await
        .unwrap();
    assert_eq!(outcome, ActionOutcome::Success(ActionKind::Shown));

    let outcome = client
        .admin()
        .toggle_visibility(&signer, &id, false)
        .await
        .unwrap();
    assert_eq!(outcome, ActionOutcome::Success(ActionKind::Hidden));
}

#[tokio::test]
async fn test_overlapping_actions_on_same_id_are_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/hide-vaults"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let gate = Arc::new(Notify::new());
    let signer = CountingSigner::gated(gate.clone());
    let id = ResourceId::new("v1");
    let admin = client.admin();

    // The first call holds the guard while it waits on the signer.
    let (first, second, _) = tokio::join!(
        admin.hide(&signer, &id),
        admin.hide(&signer, &id),
        async { gate.notify_one() }
    );

    assert_eq!(first.unwrap(), ActionOutcome::Success(ActionKind::Hidden));
    match second {
        Err(SdkError::ActionInFlight(rejected)) => assert_eq!(rejected, id),
        other => panic!("expected ActionInFlight, got {:?}", other),
    }
    assert!(!admin.is_in_flight(&id));
}

#[tokio::test]
async fn test_overlapping_actions_on_different_ids_proceed() {
    let server = MockServer::start().await;
    mount(&server, "POST", "/api/hide-vaults", 201).await;
    mount(&server, "POST", "/api/archived-vaults/archive", 201).await;

    let client = client_for(&server);
    let signer = CountingSigner::connected();
    let admin = client.admin();
    let a = ResourceId::new("a");
    let b = ResourceId::new("b");

    let (hidden, archived) = tokio::join!(admin.hide(&signer, &a), admin.archive(&signer, &b));

    assert_eq!(hidden.unwrap(), ActionOutcome::Success(ActionKind::Hidden));
    assert_eq!(archived.unwrap(), ActionOutcome::Success(ActionKind::Archived));
}

#[tokio::test]
async fn test_unauthorized_and_server_error_outcomes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/hide-vaults"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/archived-vaults/archive"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let signer = CountingSigner::connected();
    let id = ResourceId::new("v1");

    let outcome = client.admin().hide(&signer, &id).await.unwrap();
    assert_eq!(outcome, ActionOutcome::Unauthorized);
    assert_eq!(
        outcome.message(),
        "Your address is not in the admin list or token is invalid."
    );

    let outcome = client.admin().archive(&signer, &id).await.unwrap();
    assert_eq!(
        outcome,
        ActionOutcome::ServerError {
            status: 500,
            body: "boom".to_string()
        }
    );
}
