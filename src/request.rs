//! Request construction for the Anthropic messages endpoint

use crate::{ClientConfig, Result};
use log::debug;
use serde::Serialize;

/// Request payload for the messages API
#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Render the prompt from the profile and diff. Both are substituted
/// verbatim, including embedded newlines; either may be empty.
pub fn render_prompt(profile: &str, diff: &str) -> String {
    format!(
        "Here is my profile:\n\n{}\n\nHere is a git diff that needs review:\n\n{}\n\nPlease provide a concise title and description of the changes.",
        profile, diff
    )
}

/// Build the serialized request body for one invocation. The payload carries
/// exactly one user message; escaping is whatever JSON itself requires.
pub fn build_request_body(config: &ClientConfig, profile: &str, diff: &str) -> Result<String> {
    let content = render_prompt(profile, diff);
    debug!("Content length: {} bytes", content.len());

    let request = CompletionRequest {
        model: config.model.clone(),
        max_tokens: config.max_tokens,
        temperature: config.temperature,
        messages: vec![Message {
            role: "user".to_string(),
            content,
        }],
    };

    let body = serde_json::to_string(&request)?;
    debug!("JSON request payload created ({} bytes)", body.len());
    Ok(body)
}
