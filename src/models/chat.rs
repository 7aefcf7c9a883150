//! Chat data model
//!
//! Defines the uniform conversation types exchanged with all providers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Message role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction
    System,
    /// End-user message
    User,
    /// Model reply
    Assistant,
}

/// A single role-tagged chat message
///
/// An ordered sequence of messages forms a conversation. The sequence is
/// replayed verbatim to the backend, so order is semantically significant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role
    pub role: Role,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Per-call tuning options
#[derive(Debug, Clone)]
pub struct CallOptions {
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Timeout for each HTTP attempt
    pub timeout: Duration,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 2000,
            timeout: Duration::from_secs(60),
        }
    }
}

/// Successful completion outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The assistant's reply text
    pub content: String,
    /// Token count reported by the provider (0 if unreported)
    pub tokens_used: u32,
}

/// Snapshot of accumulated gateway usage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    /// Total calls reaching a terminal outcome (success or failure)
    pub calls: u64,
    /// Total provider-reported tokens across successful calls
    pub tokens: u64,
    /// Time of the most recent successful call
    pub last_call: Option<DateTime<Utc>>,
}
