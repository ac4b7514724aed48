//! Chat completion through the gateway's OpenAI-compatible passthrough.
//!
//! Run with:
//! ```bash
//! export SENTINEL_API_KEY="your-api-key"
//! cargo run --example chat_completions
//! ```

use nonempty::nonempty;
use sentinel_sdk::{ChatMessage, ChatRequest, GatewayClient, GatewayOptions};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("SENTINEL_API_KEY")
        .expect("SENTINEL_API_KEY environment variable must be set");

    let client = GatewayClient::new(GatewayOptions::new().with_credential(api_key));

    let request = ChatRequest::new(
        "gpt-4o",
        nonempty![
            ChatMessage::system("You are a concise assistant."),
            ChatMessage::user("What is the capital of France? Answer in one word.")
        ],
    )
    .with_temperature(0.7)
    .with_max_tokens(100)
    .with_extra("top_p", json!(0.9));

    println!("Sending request through the gateway...");
    match client.chat_completions().create(request).await {
        Ok(response) => {
            println!("\n=== Response ===");
            if let Some(content) = response["choices"][0]["message"]["content"].as_str() {
                println!("{content}");
            } else {
                println!("{response}");
            }
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
        }
    }

    Ok(())
}
