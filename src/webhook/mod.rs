//! Webhook client module for the Sheets submission endpoint

mod client;
mod error;
mod payload;
mod traits;

pub use client::SheetsClient;
pub use error::WebhookError;
pub use payload::to_pairs;
pub use traits::WebhookClient;

#[cfg(test)]
pub use traits::MockWebhookClient;
