//! OpenAI-compatible chat completions sub-interface.

use reqwest::Method;
use serde_json::Value;

use crate::client::{GatewayClient, GatewayError};
use crate::model::ChatRequest;

/// Chat completions interface, borrowed from a [`GatewayClient`].
///
/// Mirrors the OpenAI chat completion call shape; the gateway forwards the
/// request to the configured provider after running its security pipeline.
///
/// # Example
/// ```no_run
/// use nonempty::nonempty;
/// use sentinel_sdk::{ChatMessage, ChatRequest, GatewayClient, GatewayOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = GatewayClient::new(GatewayOptions::new());
///     let response = client
///         .chat_completions()
///         .create(
///             ChatRequest::new("gpt-4o", nonempty![ChatMessage::user("Hello!")])
///                 .with_temperature(0.7),
///         )
///         .await?;
///     println!("{response}");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChatCompletions<'a> {
    client: &'a GatewayClient,
}

impl<'a> ChatCompletions<'a> {
    pub(crate) fn new(client: &'a GatewayClient) -> Self {
        Self { client }
    }

    /// Create a chat completion through the gateway.
    ///
    /// Returns the raw decoded response; the completion shape is the
    /// provider's, passed through unvalidated.
    pub async fn create(&self, request: ChatRequest) -> Result<Value, GatewayError> {
        let body = request.into_body();
        self.client
            .request(Method::POST, "/v1/chat/completions", Some(&body), None)
            .await
    }
}
