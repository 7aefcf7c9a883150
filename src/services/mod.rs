//! Service layer module
//!
//! Contains the retry executor, usage meter and gateway facade

pub mod executor;
pub mod gateway;
pub mod usage;

pub use executor::{RetryConfig, RetryExecutor};
pub use gateway::Gateway;
pub use usage::UsageMeter;
