//! Provider wire formats
//!
//! Request and response structures for the two wire dialects spoken by the
//! supported backends: OpenAI-compatible chat completions (DeepSeek, Kimi)
//! and Baidu Qianfan (Ernie, Doubao). Field names must be preserved exactly
//! to stay wire-compatible with each backend.

use crate::models::chat::ChatMessage;
use serde::{Deserialize, Serialize};

// ====== OpenAI-compatible chat completions ======

/// Chat completion request body
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    /// Model name
    pub model: &'a str,
    /// Conversation, replayed verbatim
    pub messages: &'a [ChatMessage],
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

/// Chat completion response body
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion choices (the first carries the assistant reply)
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    /// Token usage (optional)
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

/// A single completion choice
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    /// The assistant message
    pub message: AssistantMessage,
}

/// Assistant message within a choice
#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    /// Reply text (absent for some malformed responses)
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage block
#[derive(Debug, Deserialize)]
pub struct TokenUsage {
    /// Total tokens consumed by the call
    #[serde(default)]
    pub total_tokens: u32,
}

/// Error body returned by OpenAI-compatible backends
#[derive(Debug, Deserialize)]
pub struct ChatCompletionErrorResponse {
    /// Error details
    pub error: ChatCompletionError,
}

/// Error details within an error body
#[derive(Debug, Deserialize)]
pub struct ChatCompletionError {
    /// Human-readable message
    pub message: String,
}

// ====== Baidu Qianfan ======

/// Qianfan chat request body
///
/// The model is folded into the URL path and the access token into the
/// query string, so neither appears in the body.
#[derive(Debug, Serialize)]
pub struct QianfanRequest<'a> {
    /// Conversation, replayed verbatim
    pub messages: &'a [ChatMessage],
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_output_tokens: u32,
}

/// Qianfan chat response body
///
/// Qianfan signals failures in-band with HTTP 200 plus `error_code`,
/// so both shapes are decoded from the same structure.
#[derive(Debug, Deserialize)]
pub struct QianfanResponse {
    /// Reply text on success
    #[serde(default)]
    pub result: Option<String>,
    /// Token usage (optional)
    #[serde(default)]
    pub usage: Option<TokenUsage>,
    /// In-band error code (present only on failure)
    #[serde(default)]
    pub error_code: Option<i64>,
    /// In-band error message
    #[serde(default)]
    pub error_msg: Option<String>,
}

/// OAuth token endpoint response
#[derive(Debug, Deserialize)]
pub struct OAuthTokenResponse {
    /// The access token on success
    #[serde(default)]
    pub access_token: Option<String>,
    /// Error code on failure
    #[serde(default)]
    pub error: Option<String>,
    /// Error description on failure
    #[serde(default)]
    pub error_description: Option<String>,
}
