//! Stub libraries and fixtures shared by the unit tests.
//!
//! Compiled only under `#[cfg(test)]`.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::library::{Book, BookSearch, Category, SearchError};

/// A stub library that serves the same canned chart for every category.
pub struct StubLibrary {
    pub books: Vec<Book>,
}

#[async_trait]
impl BookSearch for StubLibrary {
    fn name(&self) -> &str {
        "stub"
    }

    async fn search_top_books(&self, _category: Category) -> Result<Vec<Book>, SearchError> {
        Ok(self.books.clone())
    }
}

/// A library whose every request fails with a network error.
pub struct FailingLibrary;

#[async_trait]
impl BookSearch for FailingLibrary {
    fn name(&self) -> &str {
        "failing"
    }

    async fn search_top_books(&self, _category: Category) -> Result<Vec<Book>, SearchError> {
        Err(SearchError::Network("connection refused".to_string()))
    }
}

/// Records which categories were requested, then serves an empty chart.
pub struct RecordingLibrary {
    pub requests: Mutex<Vec<Category>>,
}

impl RecordingLibrary {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl BookSearch for RecordingLibrary {
    fn name(&self) -> &str {
        "recording"
    }

    async fn search_top_books(&self, category: Category) -> Result<Vec<Book>, SearchError> {
        self.requests.lock().unwrap().push(category);
        Ok(Vec::new())
    }
}

/// A library that never answers. For exercising cancellation paths.
pub struct StalledLibrary;

#[async_trait]
impl BookSearch for StalledLibrary {
    fn name(&self) -> &str {
        "stalled"
    }

    async fn search_top_books(&self, _category: Category) -> Result<Vec<Book>, SearchError> {
        std::future::pending::<()>().await;
        unreachable!()
    }
}

/// Creates a test App backed by an empty [`StubLibrary`].
pub fn test_app() -> crate::core::state::App {
    test_app_with(Arc::new(StubLibrary { books: Vec::new() }))
}

/// Creates a test App backed by the given library client.
pub fn test_app_with(library: Arc<dyn BookSearch>) -> crate::core::state::App {
    crate::core::state::App::new(library)
}

/// Generates `n` distinct books for chart assertions.
pub fn sample_books(n: usize) -> Vec<Book> {
    (1..=n as u64)
        .map(|i| Book {
            id: 9_000_000 + i,
            title_statement: format!("표본 도서 {i}"),
            author: format!("저자 {i}"),
            publisher: "시험출판".to_string(),
            thumbnail_url: format!("https://covers.example/{i}.jpg"),
        })
        .collect()
}
