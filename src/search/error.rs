/// Failures of a single search request. None of these are retried.
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// The gh executable could not be located or started
    #[error("gh not found: {detail}")]
    TransportUnavailable { detail: String },

    /// gh ran but the API call failed
    #[error("failed to run gh: {detail}")]
    RequestFailed { detail: String },

    #[error("failed to decode search response: {0}")]
    DecodeFailure(#[from] serde_json::Error),
}

impl SearchError {
    pub fn unavailable<S: Into<String>>(detail: S) -> Self {
        Self::TransportUnavailable {
            detail: detail.into(),
        }
    }

    pub fn request<S: Into<String>>(detail: S) -> Self {
        Self::RequestFailed {
            detail: detail.into(),
        }
    }
}
