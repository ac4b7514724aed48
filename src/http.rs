//! HTTP utilities for talking to the gateway.
//!
//! This module provides reusable HTTP client construction and
//! header application shared by all gateway operations.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, RequestBuilder};

use crate::options::GatewayOptions;

/// Fixed client-identifying user agent sent on every request.
pub const SDK_USER_AGENT: &str = concat!("Sentinel-Rust-SDK/", env!("CARGO_PKG_VERSION"));

/// Build a configured HTTP client from gateway options.
///
/// Applies the configured timeout. The client is cheap to build and is
/// created per call; no connection pool outlives a request.
pub fn build_http_client(options: &GatewayOptions) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(options.timeout()).build()
}

/// Apply the standard gateway headers to a request.
///
/// Every request carries `Content-Type: application/json` and the SDK user
/// agent. The `Authorization: Bearer <credential>` header is added only when
/// a credential is configured.
pub fn apply_headers(request: RequestBuilder, options: &GatewayOptions) -> RequestBuilder {
    let mut request = request
        .header(CONTENT_TYPE, "application/json")
        .header(USER_AGENT, SDK_USER_AGENT);

    if let Some(credential) = options.credential() {
        request = request.header(
            AUTHORIZATION,
            format!("Bearer {}", credential.expose_secret()),
        );
    }

    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_build_http_client() {
        let options = GatewayOptions::new().with_timeout(Duration::from_secs(5));
        let client = build_http_client(&options);
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_names_the_sdk() {
        assert!(SDK_USER_AGENT.starts_with("Sentinel-Rust-SDK/"));
    }
}
