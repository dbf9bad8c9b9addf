use thiserror::Error;

/// Shown by the booking form for every failed submission.
pub const BOOKING_FAILED_MESSAGE: &str = "Failed to submit booking. Please try again.";
/// Shown by the review section for every failed fetch.
pub const REVIEWS_FAILED_MESSAGE: &str = "Failed to fetch reviews.";

/// Broad failure category, kept separate from the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Network,
    Server,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("required fields are empty: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },
    #[error("request did not complete: {0}")]
    Network(String),
    #[error("server responded with {status} {status_text}")]
    Server { status: u16, status_text: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Validation { .. } => ErrorKind::Validation,
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::Server { .. } | ApiError::Decode(_) => ErrorKind::Server,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
