//! Core gateway client and error types.

use std::collections::HashMap;

use reqwest::Method;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::chat::ChatCompletions;
use crate::http::{apply_headers, build_http_client};
use crate::options::GatewayOptions;

/// Errors that can occur during gateway operations.
///
/// Every call either returns a decoded payload or exactly one of these
/// kinds; the client performs no recovery, retry, or fallback.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Connection failure, DNS failure, or timeout expiry before a response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status from the gateway, with the raw response text.
    #[error("gateway returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// 2xx response whose non-empty body is not valid JSON.
    #[error("invalid JSON in gateway response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the Sentinel gateway REST API.
///
/// Holds immutable connection options and produces one authenticated HTTP
/// call per invocation, returning the decoded JSON body as-is. The client is
/// schema-agnostic; response shapes are the gateway's business.
///
/// Calls share no mutable state, so a client may be used from concurrent
/// tasks without locking.
///
/// # Example
/// ```no_run
/// use sentinel_sdk::{GatewayClient, GatewayOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = GatewayClient::new(GatewayOptions::new().with_credential("your-api-key"));
///     let sanitized = client.sanitize_prompt("Process SSN 123-45-6789").await?;
///     println!("{sanitized}");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GatewayClient {
    options: GatewayOptions,
}

impl GatewayClient {
    /// Create a client with the given options.
    pub fn new(options: GatewayOptions) -> Self {
        Self { options }
    }

    /// The options this client was constructed with.
    pub fn options(&self) -> &GatewayOptions {
        &self.options
    }

    /// Issue a single authenticated request against the gateway.
    ///
    /// This is the one code path every named operation goes through. A
    /// non-2xx status fails with [`GatewayError::Http`] before any decoding;
    /// a 2xx response with an empty body decodes to `{}`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&HashMap<String, String>>,
    ) -> Result<Value, GatewayError> {
        let url = format!("{}{}", self.options.base_url(), path);
        debug!(%method, path, "dispatching gateway request");

        let http = build_http_client(&self.options)?;
        let mut request = apply_headers(http.request(method, &url), &self.options);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), path, "gateway returned error status");
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        if text.is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Sanitize a prompt before it reaches an LLM provider.
    ///
    /// The expected response carries the sanitized text and detection
    /// metadata, but the shape is not enforced client-side.
    pub async fn sanitize_prompt(&self, prompt: &str) -> Result<Value, GatewayError> {
        self.request(
            Method::POST,
            "/v1/sanitize",
            Some(&json!({ "prompt": prompt })),
            None,
        )
        .await
    }

    /// Run an LLM response through the gateway's security processing.
    pub async fn process_response(&self, response: &str) -> Result<Value, GatewayError> {
        self.request(
            Method::POST,
            "/v1/process",
            Some(&json!({ "response": response })),
            None,
        )
        .await
    }

    /// Push a policy configuration to the gateway.
    pub async fn configure_policies(&self, policies: Value) -> Result<Value, GatewayError> {
        self.request(
            Method::POST,
            "/v1/policies",
            Some(&json!({ "policies": policies })),
            None,
        )
        .await
    }

    /// Probe the gateway health endpoint.
    pub async fn health(&self) -> Result<Value, GatewayError> {
        self.request(Method::GET, "/health", None, None).await
    }

    /// Fetch the gateway build and version information.
    pub async fn version(&self) -> Result<Value, GatewayError> {
        self.request(Method::GET, "/version", None, None).await
    }

    /// The OpenAI-compatible chat completions interface.
    pub fn chat_completions(&self) -> ChatCompletions<'_> {
        ChatCompletions::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::SDK_USER_AGENT;
    use crate::model::{ChatMessage, ChatRequest};
    use nonempty::nonempty;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::sync::oneshot;

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    fn content_length(head: &str) -> usize {
        head.lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.eq_ignore_ascii_case("content-length") {
                    value.trim().parse().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0)
    }

    async fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = find(&buf, b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_string();
                if buf.len() >= end + 4 + content_length(&head) {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Serve one canned response on a local port. Returns the base URL and
    /// a channel yielding the raw request the server saw.
    async fn mock_gateway(response: String) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            let _ = tx.send(request);
        });
        (format!("http://{}", addr), rx)
    }

    fn client_for(base_url: String) -> GatewayClient {
        GatewayClient::new(GatewayOptions::new().with_base_url(base_url))
    }

    #[tokio::test]
    async fn test_sanitize_prompt_returns_decoded_payload() {
        let (base, seen) =
            mock_gateway(http_response("200 OK", r#"{"sanitizedPrompt":"[REDACTED]"}"#)).await;
        let client = client_for(base);

        let result = client.sanitize_prompt("123-45-6789").await.unwrap();
        assert_eq!(result, json!({ "sanitizedPrompt": "[REDACTED]" }));

        let request = seen.await.unwrap();
        assert!(request.starts_with("POST /v1/sanitize HTTP/1.1"));
        assert!(request.contains(r#"{"prompt":"123-45-6789"}"#));
        assert!(request.contains("content-type: application/json"));
        assert!(request.contains(&format!("user-agent: {}", SDK_USER_AGENT)));
    }

    #[tokio::test]
    async fn test_process_response_posts_payload() {
        let (base, seen) =
            mock_gateway(http_response("200 OK", r#"{"processedResponse":"clean"}"#)).await;
        let client = client_for(base);

        let result = client.process_response("raw model output").await.unwrap();
        assert_eq!(result["processedResponse"], json!("clean"));

        let request = seen.await.unwrap();
        assert!(request.starts_with("POST /v1/process HTTP/1.1"));
        assert!(request.contains(r#"{"response":"raw model output"}"#));
    }

    #[tokio::test]
    async fn test_configure_policies_nests_payload() {
        let (base, seen) =
            mock_gateway(http_response("200 OK", r#"{"success":true,"message":"ok"}"#)).await;
        let client = client_for(base);

        let result = client
            .configure_policies(json!({ "pii": { "action": "redact" } }))
            .await
            .unwrap();
        assert_eq!(result["success"], json!(true));

        let request = seen.await.unwrap();
        assert!(request.starts_with("POST /v1/policies HTTP/1.1"));
        let body: Value = serde_json::from_str(request.split("\r\n\r\n").nth(1).unwrap()).unwrap();
        assert_eq!(body, json!({ "policies": { "pii": { "action": "redact" } } }));
    }

    #[tokio::test]
    async fn test_empty_body_yields_empty_object() {
        let (base, _seen) = mock_gateway(http_response("200 OK", "")).await;
        let client = client_for(base);

        let result = client.health().await.unwrap();
        assert_eq!(result, json!({}));
    }

    #[tokio::test]
    async fn test_http_error_carries_status_and_body() {
        // Body is not JSON; the call must fail on status before decoding
        let (base, _seen) = mock_gateway(http_response("404 Not Found", "no such route")).await;
        let client = client_for(base);

        match client.request(Method::GET, "/missing", None, None).await {
            Err(GatewayError::Http { status, body }) => {
                assert_eq!(status, 404);
                assert_eq!(body, "no such route");
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_decode_error() {
        let (base, _seen) = mock_gateway(http_response("200 OK", "not json")).await;
        let client = client_for(base);

        let err = client.health().await.unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}", addr));
        let err = client.health().await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[tokio::test]
    async fn test_bearer_header_sent_only_with_credential() {
        let (base, seen) = mock_gateway(http_response("200 OK", "{}")).await;
        let client = GatewayClient::new(
            GatewayOptions::new()
                .with_base_url(base)
                .with_credential("secret-token"),
        );
        client.health().await.unwrap();
        let request = seen.await.unwrap();
        assert!(request.contains("authorization: Bearer secret-token"));

        let (base, seen) = mock_gateway(http_response("200 OK", "{}")).await;
        client_for(base).health().await.unwrap();
        let request = seen.await.unwrap();
        assert!(!request.to_lowercase().contains("authorization"));
    }

    #[tokio::test]
    async fn test_query_parameters_are_appended() {
        let (base, seen) = mock_gateway(http_response("200 OK", "{}")).await;
        let client = client_for(base);

        let mut query = HashMap::new();
        query.insert("verbose".to_string(), "true".to_string());
        client
            .request(Method::GET, "/health", None, Some(&query))
            .await
            .unwrap();

        let request = seen.await.unwrap();
        assert!(request.starts_with("GET /health?verbose=true HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_chat_create_posts_merged_body() {
        let (base, seen) = mock_gateway(http_response("200 OK", r#"{"id":"chatcmpl-1"}"#)).await;
        let client = client_for(base);

        let request = ChatRequest::new("gpt-4o", nonempty![ChatMessage::user("hello")])
            .with_max_tokens(64)
            .with_extra("user", json!("tenant-7"));
        let result = client.chat_completions().create(request).await.unwrap();
        assert_eq!(result["id"], json!("chatcmpl-1"));

        let raw = seen.await.unwrap();
        assert!(raw.starts_with("POST /v1/chat/completions HTTP/1.1"));
        let body: Value = serde_json::from_str(raw.split("\r\n\r\n").nth(1).unwrap()).unwrap();
        assert_eq!(body["model"], json!("gpt-4o"));
        assert_eq!(body["messages"], json!([{ "role": "user", "content": "hello" }]));
        assert_eq!(body["max_tokens"], json!(64));
        assert_eq!(body["user"], json!("tenant-7"));
        assert!(body.get("temperature").is_none());
    }
}
