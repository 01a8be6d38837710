//! Trait abstraction for the webhook client to enable mocking in tests

use super::error::WebhookError;
use async_trait::async_trait;

/// Trait for webhook submission operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookClient: Send + Sync {
    /// POST one lead's ordered key/value pairs to the configured endpoint
    async fn submit(&self, pairs: &[(String, String)]) -> Result<(), WebhookError>;
}
