//! HTTP client for the Google Sheets webhook

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::error::WebhookError;
use super::payload;
use super::traits::WebhookClient;

/// Apps Script deployment that feeds the waitlist spreadsheet
const DEFAULT_WEBHOOK_URL: &str =
    "https://script.google.com/macros/s/AKfycbzUc_25VvcxebarxCVmZdiYCZiTkErNqkqwT5glmVZ2kL3Eibj_S_LqZPYyyILNODU/exec";

/// Environment override for the endpoint. Set but empty disables the
/// network call entirely (local development mode).
pub const WEBHOOK_URL_ENV: &str = "COOPHUB_SHEETS_WEBHOOK";

/// The Apps Script endpoint only accepts this exact content type
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// Client for the Sheets webhook endpoint
pub struct SheetsClient {
    endpoint: Option<String>,
    http_client: reqwest::Client,
}

impl SheetsClient {
    /// Build a client, resolving the endpoint from the environment, then the
    /// config file, then the built-in deployment URL
    pub fn new(config_url: Option<String>) -> Self {
        let env_value = std::env::var(WEBHOOK_URL_ENV).ok();
        Self {
            endpoint: resolve_endpoint(env_value, config_url),
            http_client: reqwest::Client::new(),
        }
    }

    /// Point the client at a custom endpoint (for testing)
    #[allow(dead_code)]
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// True when submissions will actually reach a webhook
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}

/// Endpoint precedence: environment first (empty meaning "no endpoint"),
/// then the config file, then the built-in URL
fn resolve_endpoint(env_value: Option<String>, config_url: Option<String>) -> Option<String> {
    if let Some(value) = env_value {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        return Some(trimmed.to_string());
    }
    if let Some(url) = config_url {
        let trimmed = url.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }
    Some(DEFAULT_WEBHOOK_URL.to_string())
}

#[async_trait]
impl WebhookClient for SheetsClient {
    async fn submit(&self, pairs: &[(String, String)]) -> Result<(), WebhookError> {
        let Some(endpoint) = &self.endpoint else {
            tracing::debug!("No webhook endpoint configured, keeping lead local");
            return Ok(());
        };

        let body = payload::encode(pairs);
        tracing::debug!(endpoint = %endpoint, fields = pairs.len(), "Posting lead to Sheets webhook");

        let response = self
            .http_client
            .post(endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(WebhookError::transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, error = %error_text, "Sheets webhook rejected the lead");
            return Err(WebhookError::status(status.as_u16()));
        }

        tracing::info!("Lead stored in the waitlist spreadsheet");
        Ok(())
    }
}
