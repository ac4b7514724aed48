//! # sentinel-sdk - Sentinel Gateway Client Library
//!
//! A small, pragmatic Rust client for the Sentinel security gateway's REST
//! API: prompt sanitization, response processing, policy configuration, and
//! an OpenAI-compatible chat completions passthrough.
//!
//! ## Features
//! - Async-first, tokio compatible
//! - One authenticated HTTP call per invocation; no retries, no caching
//! - Schema-agnostic: decoded JSON payloads are returned as-is
//! - Distinguishable transport / HTTP-status / decode error variants
//!
//! ## Architecture
//!
//! [`GatewayClient`] holds immutable [`GatewayOptions`] (base URL,
//! credential, timeout) and funnels every named operation through a single
//! generic request path. The [`ChatCompletions`] sub-interface borrows the
//! client and mirrors the OpenAI chat completion call shape.
//!
//! ## Example
//! ```no_run
//! use nonempty::nonempty;
//! use sentinel_sdk::{ChatMessage, ChatRequest, GatewayClient, GatewayOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GatewayClient::new(
//!         GatewayOptions::new()
//!             .with_base_url("http://localhost:8080")
//!             .with_credential("your-api-key"),
//!     );
//!
//!     // Sanitize a prompt before it reaches a provider
//!     let sanitized = client.sanitize_prompt("Process SSN 123-45-6789").await?;
//!     println!("{sanitized}");
//!
//!     // OpenAI-compatible passthrough
//!     let completion = client
//!         .chat_completions()
//!         .create(ChatRequest::new(
//!             "gpt-4o",
//!             nonempty![ChatMessage::user("Hello!")],
//!         ))
//!         .await?;
//!     println!("{completion}");
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod client;
pub mod http;
pub mod model;
pub mod options;

// Re-exports for convenience
pub use chat::ChatCompletions;
pub use client::{GatewayClient, GatewayError};
pub use model::{ChatMessage, ChatRequest};
pub use options::{GatewayOptions, SecretString};
pub use reqwest::Method;
