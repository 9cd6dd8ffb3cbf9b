//! Errors returned by the REST services.

/// Failure of a call to the apartments API.
///
/// Page controllers turn every variant into a single message for the viewer;
/// the variant only decides which message and whether the detail view shows a
/// not-found state.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad credentials or a signup conflict.
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("not found")]
    NotFound,
    /// The server rejected a create request.
    #[error("validation failed: {0}")]
    Validation(String),
    /// The server refused the bearer token.
    #[error("unauthorized")]
    Unauthorized,
    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}
