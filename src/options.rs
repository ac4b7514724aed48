//! Connection configuration for the gateway client.

use std::time::Duration;

/// Default gateway address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A secret string type for sensitive data like bearer credentials.
/// Prevents accidental logging or display of secrets.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    /// Create a new secret string.
    pub fn new(s: String) -> Self {
        Self(s)
    }

    /// Get the underlying secret value.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

/// Connection options for a [`GatewayClient`](crate::client::GatewayClient).
///
/// The base URL is normalized when set: trailing slashes are stripped so that
/// endpoint paths (which carry their own leading slash) join cleanly. Options
/// are immutable once the client is constructed.
///
/// # Example
/// ```rust
/// use sentinel_sdk::options::GatewayOptions;
/// use std::time::Duration;
///
/// let options = GatewayOptions::new()
///     .with_base_url("https://gateway.example.com/")
///     .with_credential("sk-sentinel-key")
///     .with_timeout(Duration::from_secs(10));
///
/// assert_eq!(options.base_url(), "https://gateway.example.com");
/// ```
#[derive(Debug, Clone)]
pub struct GatewayOptions {
    base_url: String,
    credential: Option<SecretString>,
    timeout: Duration,
}

impl Default for GatewayOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credential: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GatewayOptions {
    /// Create options pointing at the default local gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gateway base URL. Trailing slashes are stripped.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = normalize_base_url(base_url.as_ref());
        self
    }

    /// Set the bearer credential sent in the `Authorization` header.
    pub fn with_credential(mut self, credential: impl Into<SecretString>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Effective base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured credential, if any.
    pub fn credential(&self) -> Option<&SecretString> {
        self.credential.as_ref()
    }

    /// Configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Strip trailing slashes from a base URL. Idempotent.
fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
