// Common module - shared infrastructure used across all features.

pub mod config;
pub mod error;
pub mod fetch;
pub mod helpers;
pub mod http;
pub mod retry;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::ApiConfig;
pub use error::ApiError;
pub use fetch::FetchCoordinator;
pub use helpers::{safe_email_log, safe_token_log};
pub use http::{ApiClient, ApiEnvelope, TokenSource};
pub use retry::RetryPolicy;
pub use validation::{ValidationResult, Validator};
