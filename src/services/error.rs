use thiserror::Error;

/// Normalised failure of one API call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response; `message` is what the server said, or a fallback
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Could not build request: {0}")]
    Request(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
