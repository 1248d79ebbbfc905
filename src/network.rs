//! Network URL constants and backend endpoint paths.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Hidden vaults collection. `POST` hides, `DELETE` shows again.
pub const HIDE_VAULTS_PATH: &str = "/api/hide-vaults";

/// Archive endpoint under the archived vaults collection.
pub const ARCHIVE_VAULT_PATH: &str = "/api/archived-vaults/archive";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "VAULT_ADMIN_API_URL";

/// Environment variable overriding the domain bound into signed tokens.
pub const AUTH_DOMAIN_ENV: &str = "VAULT_ADMIN_AUTH_DOMAIN";

/// Environment variable overriding the token lifetime, in seconds.
pub const TOKEN_TTL_ENV: &str = "VAULT_ADMIN_TOKEN_TTL_SECS";
