//! Data models for the chat-completions passthrough.

use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A single message in a chat conversation.
///
/// Both fields are forwarded to the gateway verbatim; no role or content
/// validation happens client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Create a message with an arbitrary role.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a `user` message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create an `assistant` message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    /// Create a `system` message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}

/// An OpenAI-compatible chat completion request.
///
/// Optional sampling parameters are omitted from the request body entirely
/// when unset. Additional provider parameters go through `extra` and are
/// folded into the body last, so an `extra` key overrides a built-in field
/// of the same name.
///
/// # Example
/// ```rust
/// use nonempty::nonempty;
/// use sentinel_sdk::model::{ChatMessage, ChatRequest};
/// use serde_json::json;
///
/// let request = ChatRequest::new(
///     "gpt-4o",
///     nonempty![ChatMessage::user("Hello, world!")],
/// )
/// .with_temperature(0.7)
/// .with_extra("top_p", json!(0.9));
/// ```
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: NonEmpty<ChatMessage>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub extra: Map<String, Value>,
}

impl ChatRequest {
    /// Create a request for the given model and conversation.
    pub fn new(model: impl Into<String>, messages: NonEmpty<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            max_tokens: None,
            extra: Map::new(),
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Add a single additional request parameter.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Add several additional request parameters at once.
    pub fn with_extras(mut self, extras: Map<String, Value>) -> Self {
        self.extra.extend(extras);
        self
    }

    /// Build the JSON request body.
    ///
    /// Fixed fields first, optional fields only when set, `extra` pairs
    /// last with last-write-wins on key collision.
    pub(crate) fn into_body(self) -> Value {
        let mut body = Map::new();
        body.insert("model".to_string(), Value::String(self.model));
        body.insert("messages".to_string(), json!(self.messages));

        if let Some(temperature) = self.temperature {
            body.insert("temperature".to_string(), json!(temperature));
        }
        if let Some(max_tokens) = self.max_tokens {
            body.insert("max_tokens".to_string(), json!(max_tokens));
        }

        for (key, value) in self.extra {
            body.insert(key, value);
        }

        Value::Object(body)
    }
}
