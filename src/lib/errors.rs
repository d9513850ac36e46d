use serde::Deserialize;
use thiserror::Error;

/// Maximum number of server message characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}){}", http_suffix(.message))]
    Http { status: u16, message: Option<String> },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Text shown to the user: the server's own message when it sent one,
    /// otherwise the caller's fallback. Transport details never reach the UI.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

fn http_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|message| format!(": {message}"))
        .unwrap_or_default()
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extracts the `message` field from a JSON error body, trimmed and truncated.
pub fn message_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body.trim()).ok()?;
    let message = parsed.message?;
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_CHARS).collect())
    }
}
