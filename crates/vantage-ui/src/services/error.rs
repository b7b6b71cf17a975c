//! Client-side API errors.
//!
//! # Design
//! - Split transport, status and decode failures so views can word them.
//! - Prefer the server's problem document over the bare status line.

use crate::models::ProblemDetails;
use thiserror::Error;

/// Failure talking to the organization API.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network request failed: {message}")]
    Transport {
        /// Underlying fetch error.
        message: String,
    },
    /// The server answered with a non-success status.
    #[error("{title} ({status}){}", detail_suffix(.detail.as_deref()))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Problem title or status text.
        title: String,
        /// Problem detail, when supplied.
        detail: Option<String>,
    },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {message}")]
    Decode {
        /// Decoder error.
        message: String,
    },
}

impl ApiError {
    /// Build a status error, using the problem document when one was returned.
    #[must_use]
    pub fn from_status(status: u16, status_text: &str, problem: Option<ProblemDetails>) -> Self {
        match problem {
            Some(problem) => Self::Status {
                status,
                title: problem.title,
                detail: problem.detail,
            },
            None => Self::Status {
                status,
                title: status_text.to_string(),
                detail: None,
            },
        }
    }

    /// HTTP status when the server responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map(|detail| format!(": {detail}")).unwrap_or_default()
}
