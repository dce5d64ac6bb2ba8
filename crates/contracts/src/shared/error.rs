use thiserror::Error;

/// Failure talking to the order spreadsheet service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("HTTP error! status: {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The service answered with `success: false`
    #[error("Service rejected the request: {}", .0.as_deref().unwrap_or("no details"))]
    Rejected(Option<String>),

    #[error("Failed to serialize request: {0}")]
    Encode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl GatewayError {
    /// Transport-level failures replace the list with an error message;
    /// a rejected envelope only empties it.
    pub fn is_transport(&self) -> bool {
        !matches!(self, GatewayError::Rejected(_))
    }
}
