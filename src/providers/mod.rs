//! Provider module
//!
//! Defines the ChatProvider trait and one adapter per backend

pub mod deepseek;
pub mod doubao;
pub mod ernie;
pub mod kimi;

mod openai_compat;
mod qianfan;

use crate::models::chat::{CallOptions, ChatMessage, Completion};
use crate::utils::error::GatewayResult;
use async_trait::async_trait;

/// User agent sent with every outbound request
pub(crate) const USER_AGENT: &str = concat!("aigateway/", env!("CARGO_PKG_VERSION"));

/// Provider trait for chat completion backends
///
/// Each adapter translates the uniform `(messages, options)` call into its
/// backend's HTTP request and the backend's response into a `Completion`.
/// Adapters are stateless beyond their immutable configuration and are safe
/// to hold as one long-lived instance reused across concurrent calls.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Send a chat completion request and normalize the outcome
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CallOptions,
    ) -> GatewayResult<Completion>;
}

pub use deepseek::DeepSeekProvider;
pub use doubao::DoubaoProvider;
pub use ernie::ErnieProvider;
pub use kimi::KimiProvider;
