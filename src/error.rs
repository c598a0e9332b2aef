use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Login was rejected or its response could not be understood.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("not authenticated, log in first")]
    NotAuthenticated,

    /// The envelope reported failure or carried no payload.
    #[error("request to {endpoint} failed (status {status}){}", detail(.message))]
    RequestFailed {
        endpoint: &'static str,
        status: i64,
        message: Option<String>,
    },

    #[error("failed to decode response: {0}")]
    DecodeFailed(#[from] serde_json::Error),

    #[error("transport failed: {0}")]
    TransportFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("notification failed with HTTP status {0}")]
    NotificationFailed(u16),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::TransportFailed(Box::new(err))
    }
}

fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|msg| format!(": {msg}"))
        .unwrap_or_default()
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
