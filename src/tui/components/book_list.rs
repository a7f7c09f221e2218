//! # BookList Component
//!
//! Scrollable view of the charted titles.
//!
//! ## Architecture
//!
//! `BookList` is a transient component (created each frame) that wraps
//! `&'a mut BookListState` (persistent state) and the chart slice (props).
//!
//! The chart holds at most ten cards, so card heights are recomputed every
//! frame instead of being cached. The interesting state is the scroll
//! offset, which survives between frames and is reset when a new search
//! starts.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::library::Book;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::book_card::BookCard;
use crate::tui::event::TuiEvent;

/// Scroll state for the chart view.
/// Must be persisted in the parent TuiState; replaced on every new search.
pub struct BookListState {
    /// tui-scrollview's offset bookkeeping
    pub scroll_state: ScrollViewState,
    /// Card heights from the last render, in chart order
    pub heights: Vec<u16>,
    /// Viewport height from the last render; clamping needs it between frames
    pub viewport_height: u16,
}

impl Default for BookListState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            heights: Vec::new(),
            viewport_height: 0,
        }
    }

    /// Pull the scroll offset back inside the content bounds.
    /// Prevents overscrolling past the last card.
    pub fn clamp_scroll(&mut self) {
        let total_content_height: u16 = self.heights.iter().sum();
        let max_y = total_content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Scrollable chart view component.
/// Rebuilt each frame around the persistent state and the chart slice.
pub struct BookList<'a> {
    pub state: &'a mut BookListState,
    pub books: &'a [Book],
}

impl<'a> BookList<'a> {
    pub fn new(state: &'a mut BookListState, books: &'a [Book]) -> Self {
        Self { state, books }
    }
}

impl<'a> Component for BookList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area

        self.state.heights = self
            .books
            .iter()
            .map(|book| BookCard::calculate_height(book, content_width))
            .collect();
        let total_height: u16 = self.state.heights.iter().sum();

        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (i, book) in self.books.iter().enumerate() {
            let height = self.state.heights[i];
            let card_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(BookCard::new(book, i + 1), card_rect);
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// EventHandler is implemented on `BookListState` rather than `BookList`
/// because event handling needs the persistent scroll state; the transient
/// wrapper is recreated each frame and can't hold it.
impl EventHandler for BookListState {
    type Event = (); // Scrolling is handled internally; nothing to emit

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollToTop => {
                self.scroll_state.scroll_to_top();
                None
            }
            TuiEvent::ScrollToBottom => {
                self.scroll_state.scroll_to_bottom();
                self.clamp_scroll();
                None
            }
            _ => None,
        }
    }
}
