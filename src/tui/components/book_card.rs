use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::library::Book;
use crate::tui::component::Component;

/// Padding between the border and text content, per side.
const CONTENT_PAD_H: u16 = 1;
/// Columns lost to the left/right borders plus padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Rows lost to the top/bottom borders.
const VERTICAL_OVERHEAD: u16 = 2;
/// Ranks at or above this position get the accent border.
const TOP_RANKS: usize = 3;

/// A stateless component that renders one charted title as a bordered card.
///
/// # Design
///
/// `BookCard` is a **transient component**: `BookList` creates one per charted
/// title each frame. The block title carries the chart rank, so the first card
/// reads `╭ 1 ──` on screen and the digit keys stay free for category jumps.
///
/// # Height Calculation
///
/// The [`calculate_height`](Self::calculate_height) method predicts rendered
/// height using `textwrap` with options that match Ratatui's `Paragraph`
/// wrapping behavior. This lets `BookList` size its scroll canvas without
/// rendering each card first. Each field wraps independently, mirroring the
/// `Line`s the card renders: title, author, publisher, and the cover URL
/// when the record carries one.
#[derive(Clone, Copy)]
pub struct BookCard<'a> {
    /// The charted title to render
    pub book: &'a Book,
    /// 1-based chart position
    pub rank: usize,
}

impl<'a> BookCard<'a> {
    pub fn new(book: &'a Book, rank: usize) -> Self {
        Self { book, rank }
    }

    /// Wrapped line count for one field at the card's inner width.
    ///
    /// The wrapping options must match the Ratatui default for `Paragraph`,
    /// or the predicted height drifts from what actually renders.
    fn wrapped_line_count(text: &str, width: u16) -> u16 {
        let options = textwrap::Options::new(width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        (textwrap::wrap(text.trim(), options).len() as u16).max(1)
    }

    /// Calculate the height required for this card given an outer width.
    pub fn calculate_height(book: &Book, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Terminal narrower than borders + padding.
            // Return 1 row so the card still occupies space in the layout.
            return 1;
        }

        let mut height = Self::wrapped_line_count(&book.title_statement, content_width)
            + Self::wrapped_line_count(&book.author, content_width)
            + Self::wrapped_line_count(&book.publisher, content_width)
            + VERTICAL_OVERHEAD;
        if !book.thumbnail_url.is_empty() {
            height += Self::wrapped_line_count(&book.thumbnail_url, content_width);
        }
        height
    }
}

// Widget (not just Component) so ScrollView can render it directly
impl<'a> Widget for BookCard<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        // Chart podium: the top three ranks carry the accent color.
        let border_style = if self.rank <= TOP_RANKS {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .title(format!(" {} ", self.rank))
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::styled(
                self.book.title_statement.trim(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(self.book.author.trim(), Style::default().fg(Color::Cyan)),
            Line::styled(
                self.book.publisher.trim(),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        // Cover art stays a URL in the terminal; shown verbatim, not fetched.
        if !self.book.thumbnail_url.is_empty() {
            lines.push(Line::styled(
                self.book.thumbnail_url.trim(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            ));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);
    }
}

/// `BookCard` is stateless, so the `&mut self` required by the trait is a
/// no-op; rendering is delegated to the [`Widget`] implementation.
impl<'a> Component for BookCard<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
