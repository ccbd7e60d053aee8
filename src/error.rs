use thiserror::Error;

pub const GENERIC_FETCH_FAILURE: &str = "Request failed";

/// Everything a call against the HRMS API can fail with. Server-supplied
/// `detail` strings are carried through untouched (the duplicate-attendance
/// conflict message in particular is server-defined and never rewritten).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or transport level failure; the request never produced a
    /// usable response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with an error status and (usually) a detail message.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// 503: the backing store is down and the server is serving fixtures.
    #[error("{detail}")]
    ServiceUnavailable { detail: String },

    /// 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Human-readable message for display, preferring the server detail and
    /// falling back to a generic line for transport/decoding failures.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api { detail, .. } => detail.clone(),
            ApiError::ServiceUnavailable { detail } => format!(
                "Service unavailable: {detail}. The server may be running in demo mode."
            ),
            ApiError::Transport(_) | ApiError::Decode(_) => GENERIC_FETCH_FAILURE.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::ServiceUnavailable { .. } => Some(503),
            _ => None,
        }
    }

    /// True for the 409 the server raises on duplicate employee ids or
    /// already-marked attendance dates.
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }
}
