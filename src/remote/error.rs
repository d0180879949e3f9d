//! Gateway outcome taxonomy
//!
//! Every catalog call resolves to one of three shapes: it worked, the
//! store understood the request and declined it, or the store could not
//! be reached at all. Only rejections carry a machine-readable reason.

use thiserror::Error;

pub type GatewayResult<T> = Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport or connection failure; the store never saw the request
    /// (or its answer never arrived).
    #[error("store unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// The store validated the request and declined it.
    #[error("{0}")]
    Rejected(Rejection),

    /// Malformed client input, caught before any network call.
    #[error("invalid input: {0}")]
    Invalid(String),
}

impl GatewayError {
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            GatewayError::Rejected(r) => Some(r),
            _ => None,
        }
    }
}

/// Machine-readable reasons the store declines a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("already bookmarked")]
    AlreadyBookmarked,
    #[error("a list with that name already exists")]
    DuplicateName,
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Other(String),
}

impl Rejection {
    /// Recover a reason from the store's `{"error": "..."}` payload
    pub fn from_server_message(message: &str) -> Rejection {
        match message {
            "Already bookmarked" => Rejection::AlreadyBookmarked,
            "List exists" | "User exists" => Rejection::DuplicateName,
            m if m.to_lowercase().contains("not found") => Rejection::NotFound,
            other => Rejection::Other(other.to_string()),
        }
    }
}
