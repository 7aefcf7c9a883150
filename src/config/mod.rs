//! Configuration management module
//!
//! Responsible for loading and validating gateway configuration from the environment

pub mod settings;

pub use settings::{AuthSettings, LoggingConfig, ProviderSettings, RetrySettings, Settings};
