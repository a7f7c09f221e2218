//! # Actions
//!
//! Everything that can happen on the search screen becomes an `Action`.
//! User presses Enter? That's `Action::Search`.
//! The catalog responds? That's `Action::BooksLoaded { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the caller must
//! perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state.
//!
//! ## Cancellation
//!
//! At most one search is live at a time. `Search` bumps `search_seq` and the
//! returned `SpawnSearch` effect tells the driver to abort whatever is still
//! in flight before spawning. Abort is cooperative, so a superseded task can
//! still deliver a completion; the `seq` check here is what guarantees a
//! stale result never reaches `books`.

use log::{debug, warn};

use crate::core::state::{App, IDLE_STATUS};
use crate::library::{Book, Category, SearchError};

/// Everything that can happen in the app.
#[derive(Debug)]
pub enum Action {
    /// A category chip was picked. Selection only; no fetch.
    SelectCategory(Category),
    /// The user asked for the chart of the selected category.
    Search,
    /// A spawned search came back. `seq` is the generation it was tagged with.
    BooksLoaded {
        seq: u64,
        result: Result<Vec<Book>, SearchError>,
    },
    Quit,
}

/// I/O the caller must perform after an `update`.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Abort any search still in flight, then spawn one for `category`
    /// tagged with generation `seq`.
    SpawnSearch { seq: u64, category: Category },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SelectCategory(category) => {
            debug!("Category selected: {}", category.label());
            app.category = category;
            Effect::None
        }
        Action::Search => {
            // Results clear before the fetch starts so a chart from the
            // previous query is never shown next to the new one.
            app.books.clear();
            app.is_loading = true;
            app.search_seq += 1;
            app.status_message = format!("Searching {}...", app.category.label());
            Effect::SpawnSearch {
                seq: app.search_seq,
                category: app.category,
            }
        }
        Action::BooksLoaded { seq, result } => {
            if seq != app.search_seq {
                // A newer search started after this one was spawned. Its
                // completion must not overwrite the newer query's results.
                debug!(
                    "Dropping stale search completion (seq={}, current={})",
                    seq, app.search_seq
                );
                return Effect::None;
            }
            app.is_loading = false;
            match result {
                Ok(books) => {
                    debug!("Chart delivered: {} titles", books.len());
                    app.status_message = if books.is_empty() {
                        String::from("Nothing charted for this window")
                    } else {
                        format!("Top {} most borrowed", books.len())
                    };
                    app.books = books;
                }
                Err(e) => {
                    // The screen shows an empty shelf either way; the log
                    // keeps the reason.
                    warn!("Search failed: {}", e);
                    app.books.clear();
                    app.status_message = String::from(IDLE_STATUS);
                }
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
