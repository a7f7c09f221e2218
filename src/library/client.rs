use std::fmt;

use async_trait::async_trait;

use super::types::{Book, Category};

/// Errors that can occur while fetching a chart.
/// The reducer treats every variant identically; the variants exist so the
/// log can say what actually went wrong.
#[derive(Debug)]
pub enum SearchError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The catalog answered with a non-success HTTP status.
    Api { status: u16, message: String },
    /// The response body did not match the expected envelope.
    Decode(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Network(msg) => write!(f, "network error: {msg}"),
            SearchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SearchError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// A source of top-charted books, keyed by category.
///
/// One lookup, one error type. Anything that can produce ten books for a
/// category can stand in for the live catalog (see `FixtureClient` and the
/// test stubs).
#[async_trait]
pub trait BookSearch: Send + Sync {
    /// Returns the name of the client.
    fn name(&self) -> &str;

    /// Fetches the most-borrowed books for `category`, best first.
    async fn search_top_books(&self, category: Category) -> Result<Vec<Book>, SearchError>;
}
