//! Cinelist Search - title search and detail lookup

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Talks to the OMDb metadata API (or an offline demo catalog) and returns
//! plain summary and detail records for the view layer to render.

pub mod client;
pub mod errors;
pub mod providers;
pub mod query;

// Re-export main types
pub use client::{DetailClient, SearchClient, provider_for};
pub use errors::{DetailError, SearchError};
pub use providers::MetadataProvider;
pub use query::SearchQuery;
