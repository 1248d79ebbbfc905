//! Domain normalization for token binding.
//!
//! Tokens are bound to a bare domain (`"example.com"`), while configuration
//! usually carries a full base URL (`"https://example.com/app"`).

use url::Url;

/// Reduce a base URL or bare domain to the bare domain bound into the challenge.
///
/// - Input without a scheme separator is returned unchanged.
/// - Otherwise the input is parsed as a URL and its host is returned.
/// - If parsing fails, a leading `http://` or `https://` is stripped instead.
///
/// Never fails.
pub fn normalize_domain(input: &str) -> String {
    if !input.contains("://") {
        return input.to_string();
    }

    match Url::parse(input) {
        Ok(url) => match url.host_str() {
            Some(host) => host.to_string(),
            None => strip_scheme(input).to_string(),
        },
        Err(e) => {
            tracing::debug!(input, error = %e, "Domain is not a valid URL, stripping scheme");
            strip_scheme(input).to_string()
        }
    }
}

fn strip_scheme(input: &str) -> &str {
    input
        .strip_prefix("https://")
        .or_else(|| input.strip_prefix("http://"))
        .unwrap_or(input)
}
