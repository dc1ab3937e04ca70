//! Brand color suggestions for technology tags.
//!
//! One chat-completions request per suggestion, deterministic settings, a
//! strict hex validation of whatever the model says, and a fixed fallback
//! when the reply is not a color. Persisting an accepted color is the
//! caller's job; this module never writes to the store.

use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

const SYSTEM_PROMPT: &str = "You are a color expert for brand identities and programming technologies. \
Your task is to provide the most representative HEX color code for a given technology, \
programming language, or framework. Return ONLY the hex code (including #), nothing else.";

static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();

/// `#` followed by exactly 3 or 6 hex digits, any case.
pub fn is_valid_hex(value: &str) -> bool {
    let regex = HEX_COLOR_REGEX
        .get_or_init(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("valid regex"));
    regex.is_match(value)
}

/// Ask the model for the named technology's brand color.
///
/// Returns the validated hex code, or the configured fallback color when
/// the reply fails validation. An `Err` means the upstream call itself
/// failed and the endpoint should answer 500.
pub async fn suggest_color(config: &Config, tech_name: &str) -> Result<String> {
    let client = reqwest::Client::new();

    let user_prompt = format!(
        "What is the official brand color or most representative color for the technology/programming language named \"{}\"?",
        tech_name
    );

    let request = ChatRequest {
        model: config.openai_model.clone(),
        messages: vec![
            Message {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            Message {
                role: "user".to_string(),
                content: user_prompt,
            },
        ],
        max_tokens: 7,
        temperature: 0.0,
    };

    let response = client
        .post(format!("{}/v1/chat/completions", config.openai_api_base))
        .header("Authorization", format!("Bearer {}", config.openai_api_key))
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .context("Failed to send request to OpenAI API")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("OpenAI API error ({}): {}", status, body);
    }

    let chat_response: ChatResponse = response
        .json()
        .await
        .context("Failed to parse OpenAI response")?;

    let suggestion = chat_response
        .choices
        .first()
        .map(|c| c.message.content.trim().to_string())
        .unwrap_or_default();

    if is_valid_hex(&suggestion) {
        Ok(suggestion)
    } else {
        info!(
            "Model reply {:?} for {:?} is not a hex color, using fallback",
            suggestion, tech_name
        );
        Ok(config.fallback_color.clone())
    }
}
