//! Cinelist Core - title records, watchlist, and configuration
//!
//! This crate holds the plain data every other Cinelist crate passes around:
//! summary and detail records for titles, the session watchlist, runtime
//! configuration, and tracing setup.

pub mod catalog;
pub mod config;
pub mod mode;
pub mod tracing_setup;
pub mod watchlist;

// Re-export main types for convenient access
pub use catalog::{DetailRecord, MediaId, Poster, SummaryRecord};
pub use config::{ApiConfig, CinelistConfig, DisplayConfig, PlotMode};
pub use mode::RuntimeMode;
pub use watchlist::{AlreadyExists, WatchlistStore};

/// Errors raised while setting up a Cinelist session.
///
/// Request-level failures have their own types in `cinelist-search` and never
/// reach this enum; they are recovered where they happen.
#[derive(Debug, thiserror::Error)]
pub enum CinelistError {
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CinelistError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            CinelistError::Configuration { reason } => format!("Invalid configuration: {reason}"),
            CinelistError::Io(_) => "File system error occurred".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CinelistError>;
