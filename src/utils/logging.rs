//! Logging utilities
//!
//! Shared logging configuration and helper functions

use crate::models::chat::ChatMessage;
use tracing::info;

/// Set to true to include full message content in debug logs
/// Default is false to reduce log verbosity
pub const VERBOSE_REQUEST_LOGGING: bool = false;

/// Initialize the logging system for host applications
///
/// Reads `RUST_LOG` for the filter and `LOG_FORMAT` (text/json) for the
/// output format. Hosts with their own subscriber can skip this.
pub fn init_logging() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if log_format == "json" {
        // JSON format logs (production environment)
        Box::new(tracing_subscriber::fmt()
            .with_env_filter(log_level)
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .finish())
    } else {
        // Human readable format (development environment)
        Box::new(tracing_subscriber::fmt()
            .with_env_filter(log_level)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .finish())
    };

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Logging system initialized");
}

/// Truncate a string with a note about original length
fn truncate_content(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len).collect();
        format!("{}... ({} chars truncated)", truncated, s.chars().count() - max_len)
    } else {
        s.to_string()
    }
}

/// Create a filtered summary of a conversation for logging
///
/// Keeps roles and ordering but truncates verbose content
pub fn conversation_log_summary(messages: &[ChatMessage]) -> serde_json::Value {
    if VERBOSE_REQUEST_LOGGING {
        serde_json::to_value(messages).unwrap_or(serde_json::json!({"error": "serialize failed"}))
    } else {
        let filtered: Vec<serde_json::Value> = messages
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": msg.role,
                    "content": truncate_content(&msg.content, 200),
                })
            })
            .collect();

        serde_json::json!({
            "message_count": messages.len(),
            "messages": filtered,
        })
    }
}
