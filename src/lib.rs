//! AI Chat Gateway Library
//!
//! Uniform client for multiple chat completion backends with typed errors,
//! bounded retries and process-wide usage metering

pub mod config;
pub mod credentials;
pub mod models;
pub mod providers;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use models::{CallOptions, ChatMessage, Completion, Role, UsageStats};
pub use providers::ChatProvider;
pub use services::{Gateway, RetryConfig};
pub use utils::error::{GatewayError, GatewayResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
