//! Error types for title search and detail lookup.
//!
//! Every variant is recovered by the caller that triggered the request and
//! shown inline; none of them is fatal.

use thiserror::Error;

/// Errors that can occur while searching titles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Transport failure, non-success status, or a malformed response body.
    #[error("Network error: {reason}")]
    Network {
        /// What went wrong on the wire
        reason: String,
    },

    /// The API answered but reported a failure such as "Movie not found!".
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable message from the API, shown to the user verbatim
        message: String,
    },
}

impl SearchError {
    /// Status text shown in place of results.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Network { .. } => "Network error or invalid API key.".to_string(),
            SearchError::NotFound { message } => message.clone(),
        }
    }
}

/// Errors that can occur while fetching details for one title.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailError {
    /// Transport failure, non-success status, or a malformed response body.
    #[error("Network error: {reason}")]
    Network {
        /// What went wrong on the wire
        reason: String,
    },

    /// The API has no record for the identifier.
    #[error("No details found")]
    NotFound,
}

impl DetailError {
    /// Inline text shown inside the details panel.
    pub fn user_message(&self) -> &'static str {
        match self {
            DetailError::Network { .. } => "Error loading details.",
            DetailError::NotFound => "No details available.",
        }
    }
}
