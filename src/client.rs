//! High-level client — `VaultAdminClient` with nested sub-client accessors.
//!
//! The admin sub-client lives in `domain/admin/client.rs`. This module keeps
//! the builder, the shared in-flight set, and the accessor.

use crate::auth::TokenOptions;
use crate::domain::admin::client::Admin;
use crate::domain::admin::InFlightSet;
use crate::error::SdkError;
use crate::http::client::DEFAULT_TIMEOUT;
use crate::http::AdminHttp;
use crate::network::{API_URL_ENV, AUTH_DOMAIN_ENV, TOKEN_TTL_ENV};

use chrono::TimeDelta;
use std::time::Duration;
use url::Url;

// Re-export sub-client types for convenience.
pub use crate::domain::admin::client::Admin as AdminClient;

/// The primary entry point for the SDK.
///
/// Holds no credentials: every action signs a fresh token. Cloning shares the
/// HTTP connection pool and the in-flight set.
#[derive(Clone)]
pub struct VaultAdminClient {
    pub(crate) http: AdminHttp,
    pub(crate) token_options: TokenOptions,
    /// Resource ids with an action currently in flight.
    pub(crate) in_flight: InFlightSet,
}

impl VaultAdminClient {
    pub fn builder() -> VaultAdminClientBuilder {
        VaultAdminClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn admin(&self) -> Admin<'_> {
        Admin { client: self }
    }

    // ── Low-level access ─────────────────────────────────────────────────

    /// The underlying stateless dispatcher.
    pub fn http(&self) -> &AdminHttp {
        &self.http
    }

    pub fn token_options(&self) -> &TokenOptions {
        &self.token_options
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct VaultAdminClientBuilder {
    base_url: String,
    auth_domain: Option<String>,
    statement: Option<String>,
    token_ttl: Duration,
    request_timeout: Duration,
}

impl Default for VaultAdminClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            auth_domain: None,
            statement: None,
            token_ttl: crate::auth::token::DEFAULT_TOKEN_TTL,
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl VaultAdminClientBuilder {
    /// Start from defaults overridden by `VAULT_ADMIN_*` environment variables.
    pub fn from_env() -> Result<Self, SdkError> {
        let mut builder = Self::default();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder.base_url = url;
        }
        if let Ok(domain) = std::env::var(AUTH_DOMAIN_ENV) {
            builder.auth_domain = Some(domain);
        }
        if let Ok(ttl) = std::env::var(TOKEN_TTL_ENV) {
            let secs = ttl.trim().parse::<u64>().map_err(|e| {
                SdkError::Config(format!("{} must be a number of seconds: {}", TOKEN_TTL_ENV, e))
            })?;
            builder.token_ttl = Duration::from_secs(secs);
        }

        Ok(builder)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Domain (or URL) bound into every token. Defaults to the base URL's host.
    pub fn auth_domain(mut self, domain: &str) -> Self {
        self.auth_domain = Some(domain.to_string());
        self
    }

    pub fn statement(mut self, statement: &str) -> Self {
        self.statement = Some(statement.to_string());
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<VaultAdminClient, SdkError> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| SdkError::Config(format!("invalid base URL {}: {}", self.base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SdkError::Config(format!(
                "base URL must use http or https, got {}",
                parsed.scheme()
            )));
        }
        if self.token_ttl.is_zero() {
            return Err(SdkError::Config("token TTL must be positive".to_string()));
        }
        if TimeDelta::from_std(self.token_ttl).is_err() {
            return Err(SdkError::Config(format!(
                "token TTL of {}s is out of range",
                self.token_ttl.as_secs()
            )));
        }

        let domain = self.auth_domain.as_deref().unwrap_or(&self.base_url);
        let mut token_options = TokenOptions::new(domain).ttl(self.token_ttl);
        if let Some(statement) = &self.statement {
            token_options = token_options.statement(statement);
        }

        Ok(VaultAdminClient {
            http: AdminHttp::with_timeout(&self.base_url, self.request_timeout)?,
            token_options,
            in_flight: InFlightSet::new(),
        })
    }
}
