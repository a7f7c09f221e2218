//! # Application State
//!
//! Core business state for the book search screen. This module contains
//! domain logic only - no TUI-specific types. Presentation state lives in
//! the `tui` module.
//!
//! ```text
//! App
//! ├── library: Arc<dyn BookSearch>   // chart source (live or canned)
//! ├── category: Category             // selected classification class
//! ├── books: Vec<Book>               // last delivered chart
//! ├── is_loading: bool               // a search is in flight
//! ├── status_message: String         // status bar text
//! └── search_seq: u64                // generation counter for searches
//! ```
//!
//! Nothing mutates an `App` except `update(state, action)` in action.rs, so
//! every transition is visible in one place.

use crate::core::config::ResolvedConfig;
use crate::library::{Book, BookSearch, Category};
use std::sync::Arc;

/// Status line shown when nothing is in flight and nothing went wrong.
pub const IDLE_STATUS: &str = "Pick a category and press Enter";

pub struct App {
    pub library: Arc<dyn BookSearch>,
    pub category: Category,
    pub books: Vec<Book>,
    pub is_loading: bool,
    pub status_message: String,
    /// Bumped on every search start. Completions carry the value they were
    /// spawned with; anything older than the current value is stale and
    /// must not touch `books`.
    pub search_seq: u64,
}

impl App {
    pub fn new(library: Arc<dyn BookSearch>) -> Self {
        Self {
            library,
            category: Category::default(),
            books: Vec::new(),
            is_loading: false,
            status_message: String::from(IDLE_STATUS),
            search_seq: 0,
        }
    }

    pub fn from_config(library: Arc<dyn BookSearch>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(library);
        app.category = config.category;
        app
    }
}
