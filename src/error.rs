use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// The server answered with a non-success status.
    #[error("request failed: {status}")]
    Request { status: String },

    /// No response was received at all.
    #[error("could not reach the Stack Exchange API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response from the Stack Exchange API: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SearchError {
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        let status = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        SearchError::Request { status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn status_text_uses_reason_phrase() {
        let err = SearchError::from_status(StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "request failed: Bad Request");
    }

    #[test]
    fn unknown_status_falls_back_to_code() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = SearchError::from_status(status);
        assert_eq!(err.to_string(), "request failed: 599");
    }
}
