//! Basic gateway usage: sanitize a prompt, process a response, push policies.
//!
//! Run with:
//! ```bash
//! export SENTINEL_API_KEY="your-api-key"
//! cargo run --example basic_usage
//! ```

use sentinel_sdk::{GatewayClient, GatewayOptions};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut options = GatewayOptions::new().with_base_url("http://localhost:8080");
    if let Ok(api_key) = std::env::var("SENTINEL_API_KEY") {
        options = options.with_credential(api_key);
    }
    let client = GatewayClient::new(options);

    println!("=== Prompt sanitization ===");
    let prompt = "Process sensitive data: 123-45-6789";
    let sanitized = client.sanitize_prompt(prompt).await?;
    println!("Original prompt: {prompt}");
    println!("Sanitized: {sanitized}");

    println!("\n=== Response processing ===");
    let response = "Here's the sensitive information: 123-45-6789";
    let processed = client.process_response(response).await?;
    println!("Original response: {response}");
    println!("Processed: {processed}");

    println!("\n=== Policy configuration ===");
    let result = client
        .configure_policies(json!({
            "pii": { "action": "redact", "entities": ["ssn", "email"] }
        }))
        .await?;
    println!("Policy update: {result}");

    println!("\n=== Gateway status ===");
    println!("Health: {}", client.health().await?);
    println!("Version: {}", client.version().await?);

    Ok(())
}
