//! # Search Screen Components
//!
//! The widgets that make up the book search screen, one file per widget.
//!
//! ## Two Kinds of Component
//!
//! Most of the screen is stateless: a transient struct built each frame from
//! whatever the caller passes in, rendered, and dropped.
//! - `TitleBar`: Top status bar showing client name and status
//! - `CategoryBar`: Strip of classification chips with the selection marked
//! - `BookCard`: Individual charted title rendering
//! - `LandingPage`: Shown before the first chart loads
//!
//! The exception is scrolling, which has to survive across frames:
//! - `BookList`: Scrollable chart view wrapping a persistent `BookListState`
//!
//! ## Conventions
//!
//! A component's state type, rendering, event handling, and tests all live in
//! its own file. Data arrives through struct fields rather than shared
//! globals, so any component can be driven (and asserted on) in isolation
//! with a `TestBackend`. Larger components render smaller ones: `BookList`
//! draws one `BookCard` per charted title.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── category_bar.rs  (Classification chip strip)
//! ├── book_card.rs     (Single charted title)
//! ├── book_list.rs     (Scrollable chart container)
//! └── landing.rs       (Pre-search screen)
//! ```

// Re-export components
mod title_bar;
pub use title_bar::TitleBar;
pub(crate) use title_bar::SPINNER;

pub mod book_card;
pub mod book_list;
pub mod category_bar;
pub mod landing;
pub use book_list::{BookList, BookListState};
pub use category_bar::CategoryBar;
pub use landing::LandingPage;
