//! Low-level HTTP client — `AdminHttp`.
//!
//! Stateless and reentrant: every call is one request with the token passed
//! in, no retries, no backoff, no idempotency key. A duplicate call is a
//! duplicate request.

use crate::auth::AuthToken;
use crate::domain::admin::{ActionMethod, ActionOutcome, AdminAction};
use crate::error::HttpError;
use crate::shared::ResourceId;

use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

/// Default request timeout on native targets.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the vault admin endpoints.
#[derive(Clone)]
pub struct AdminHttp {
    base_url: String,
    client: Client,
}

impl AdminHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Build with a request timeout. Ignored on WASM, where the browser owns it.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Admin actions ────────────────────────────────────────────────────

    pub async fn hide_vault(&self, id: &ResourceId, token: &AuthToken) -> ActionOutcome {
        self.dispatch(&AdminAction::Hide(id.clone()), token).await
    }

    pub async fn show_vault(&self, id: &ResourceId, token: &AuthToken) -> ActionOutcome {
        self.dispatch(&AdminAction::Show(id.clone()), token).await
    }

    pub async fn archive_vault(&self, id: &ResourceId, token: &AuthToken) -> ActionOutcome {
        self.dispatch(&AdminAction::Archive(id.clone()), token).await
    }

    /// Send `action` with `token` and classify the response.
    ///
    /// Transport failures become [`ActionOutcome::TransportFailure`]; this
    /// never returns an error.
    pub async fn dispatch(&self, action: &AdminAction, token: &AuthToken) -> ActionOutcome {
        match self.try_dispatch(action, token).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(action = %action, error = %e, "Admin request failed");
                ActionOutcome::TransportFailure(e.to_string())
            }
        }
    }

    /// Like [`dispatch`](Self::dispatch), but surfaces the transport error.
    pub async fn try_dispatch(
        &self,
        action: &AdminAction,
        token: &AuthToken,
    ) -> Result<ActionOutcome, HttpError> {
        let url = format!("{}{}", self.base_url, action.path());
        let method = match action.method() {
            ActionMethod::Post => reqwest::Method::POST,
            ActionMethod::Delete => reqwest::Method::DELETE,
        };

        tracing::debug!(
            method = action.method().as_str(),
            token_len = token.len(),
            "Sending {} to {}",
            action,
            url
        );

        let resp = self
            .client
            .request(method, &url)
            .header(AUTHORIZATION, token.bearer())
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .json(&action.request_body())
            .send()
            .await
            .map_err(into_transport_error)?;

        let status = resp.status().as_u16();
        tracing::debug!(status, "Response for {}", action);

        if let Some(outcome) = action.classify_status(status) {
            if outcome == ActionOutcome::Unauthorized {
                tracing::warn!(action = %action, "Admin request unauthorized");
            }
            return Ok(outcome);
        }

        let body = resp.text().await.map_err(into_transport_error)?;
        tracing::warn!(action = %action, status, body = %body, "Admin request rejected");
        Ok(action.classify(status, body))
    }
}

fn into_transport_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(e)
    }
}
