//! Multiplayer sync errors

/// Failures of a single sync exchange or of the sync task itself
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Failed to build HTTP client: {message}")]
    ClientInit { message: String },

    #[error("Request to {endpoint} failed: {message}")]
    RequestFailed { endpoint: String, message: String },

    #[error("Endpoint {endpoint} returned status {status}")]
    BadStatus { endpoint: String, status: u16 },

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Sync task failed: {message}")]
    TaskFailed { message: String },
}

pub type SyncResult<T> = Result<T, SyncError>;

impl From<serde_json::Error> for SyncError {
    fn from(error: serde_json::Error) -> Self {
        SyncError::MalformedResponse {
            message: error.to_string(),
        }
    }
}
