//! Errors surfaced by the Sheets webhook client

use thiserror::Error;

/// Banner text when a transport failure carries no message of its own
pub const TRANSPORT_FALLBACK_MESSAGE: &str =
    "Não foi possível enviar agora. Tente novamente em instantes.";

/// Failure modes of a webhook submission. Both degrade to a banner in the
/// sign-up view; neither is fatal and the form contents survive for a retry.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The Apps Script endpoint answered outside the 2xx range
    #[error("Falha no webhook do Sheets")]
    Status { code: u16 },

    /// The request never completed (DNS, TLS, connectivity)
    #[error("{message}")]
    Transport { message: String },
}

impl WebhookError {
    pub fn status(code: u16) -> Self {
        Self::Status { code }
    }

    /// Wrap a transport failure, substituting the fixed retry hint when the
    /// underlying error has no text
    pub fn transport(source: impl ToString) -> Self {
        let message = source.to_string();
        let message = if message.trim().is_empty() {
            TRANSPORT_FALLBACK_MESSAGE.to_string()
        } else {
            message
        };
        Self::Transport { message }
    }
}
