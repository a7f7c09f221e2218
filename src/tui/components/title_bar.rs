//! # TitleBar Component
//!
//! The one-line header above the category strip.
//!
//! ## Responsibilities
//!
//! - Name the active library client (e.g. "pyxis", "fixture")
//! - Surface the current status message ("Searching 문학...", "Top 10 most
//!   borrowed", ...)
//! - Animate a spinner while a search is in flight
//!
//! ## Props
//!
//! TitleBar holds no state of its own. Every field is filled in by the caller
//! each frame, from wherever that value actually lives:
//!
//! - `client_name` comes from the injected library client
//!   (`app.library.name()`)
//! - `status_message` and `is_loading` come from core App state
//! - `spinner_frame` comes from the event loop's animation timer
//!
//! Because construction is the whole input, a test can build one with any
//! combination of values and assert on the rendered buffer directly.
//!
//! ## Formatting
//!
//! Segments join with `" | "` and empty segments are dropped:
//!
//! 1. **Loading**: `"Stacks (client: pyxis) | ⠹ Searching 문학..."`
//! 2. **Status message**: `"Stacks (client: pyxis) | Top 10 most borrowed"`
//! 3. **Default**: `"Stacks (client: pyxis)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Braille spinner frames, advanced by the event loop's animation timer.
/// Shared with the results pane so both spinners tick in step.
pub(crate) const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Top status bar component showing client name, status, and search activity.
pub struct TitleBar {
    /// Name of the active library client (e.g. "pyxis")
    pub client_name: String,
    /// Status message (e.g. "Searching 문학...", "Top 10 most borrowed")
    pub status_message: String,
    /// Whether a search is currently in flight
    pub is_loading: bool,
    /// Animation frame index; only read while loading
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(
        client_name: String,
        status_message: String,
        is_loading: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            client_name,
            status_message,
            is_loading,
            spinner_frame,
        }
    }
}

impl Component for TitleBar {
    /// Render as a single line, dropping empty segments.
    ///
    /// The title bar is always height 1. A plain `Span` is used rather than
    /// a `Block`: there is nothing to border, and asserting on the text
    /// content keeps tests simple.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.is_loading {
            format!(
                "Stacks (client: {}) | {} {}",
                self.client_name,
                SPINNER[self.spinner_frame % SPINNER.len()],
                self.status_message
            )
        } else if self.status_message.is_empty() {
            format!("Stacks (client: {})", self.client_name)
        } else {
            format!(
                "Stacks (client: {}) | {}",
                self.client_name, self.status_message
            )
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
