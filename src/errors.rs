//! Error types for the Outbreaks Near Me client.
//!
//! Every failure surfaces to the immediate caller. Nothing in this crate
//! retries or substitutes fallback data.

use reqwest::StatusCode;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OutbreaksNearMeError>;

/// Top-level error returned by every public operation.
#[derive(Debug, thiserror::Error)]
pub enum OutbreaksNearMeError {
    /// A request to the API failed.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The marker collection held no usable features, so there is no nearest one.
    #[error("no marker data returned for /{endpoint}")]
    NoData { endpoint: String },
}

impl OutbreaksNearMeError {
    /// Whether this error came from the request layer.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}

/// A classified failure from [`RequestExecutor`](crate::client::RequestExecutor).
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// A self-owned HTTP session could not be created.
    #[error("failed to create HTTP session: {0}")]
    Session(#[source] reqwest::Error),

    /// The request never produced a response (connect, timeout, body read).
    #[error("error requesting data from /{endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("error requesting data from /{endpoint}: HTTP {status}")]
    Status { endpoint: String, status: StatusCode },

    /// The response body was not the JSON shape we expected.
    #[error("unable to parse response from /{endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RequestError {
    /// The endpoint path the failing request targeted, if known.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Session(_) => None,
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => Some(endpoint.as_str()),
        }
    }

    /// The HTTP status, when the server responded with one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
