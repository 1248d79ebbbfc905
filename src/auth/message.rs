//! Challenge message generation (Web3 Token v2 body).
//!
//! The body is plain text, one field per line:
//!
//! ```text
//! example.com wants you to sign in with your Ethereum account.
//!
//! Hide and archive vaults
//!
//! URI: https://example.com/admin
//! Web3 Token Version: 2
//! Nonce: 8721393
//! Issued At: 2025-01-01T00:00:00.000Z
//! Expiration Time: 2025-01-02T00:00:00.000Z
//! ```

use chrono::{DateTime, SecondsFormat, Utc};

/// Version tag understood by the backend verifier.
pub const WEB3_TOKEN_VERSION: &str = "2";

/// A domain-bound challenge, ready to be rendered and signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeMessage {
    pub domain: String,
    pub statement: Option<String>,
    pub uri: Option<String>,
    pub nonce: u64,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ChallengeMessage {
    /// Render the exact text passed to the signer.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(9);

        if !self.domain.is_empty() {
            lines.push(format!(
                "{} wants you to sign in with your Ethereum account.",
                self.domain
            ));
            lines.push(String::new());
        }

        if let Some(statement) = self.statement.as_deref().filter(|s| !s.is_empty()) {
            lines.push(statement.to_string());
            lines.push(String::new());
        }

        if let Some(uri) = &self.uri {
            lines.push(format!("URI: {}", uri));
        }
        lines.push(format!("Web3 Token Version: {}", WEB3_TOKEN_VERSION));
        lines.push(format!("Nonce: {}", self.nonce));
        lines.push(format!("Issued At: {}", format_timestamp(&self.issued_at)));
        lines.push(format!(
            "Expiration Time: {}",
            format_timestamp(&self.expires_at)
        ));

        lines.join("\n")
    }
}

impl std::fmt::Display for ChallengeMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
