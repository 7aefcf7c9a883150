//! Data models module
//!
//! Defines the uniform chat data model and provider wire structures

pub mod chat;
pub mod wire;

pub use chat::{CallOptions, ChatMessage, Completion, Role, UsageStats};
