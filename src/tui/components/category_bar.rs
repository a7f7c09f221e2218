//! # CategoryBar Component
//!
//! Horizontal strip of classification chips, one per [`Category`], with the
//! current selection inverted. Rendered as `" {classNo} {label} "` pills so
//! the digit shown is also the jump key.
//!
//! Korean labels are double-width, so chip layout goes through
//! `unicode-width` rather than `len()`. When the terminal is too narrow for
//! all ten chips, leading chips are dropped until the selected one fits;
//! chips past the right edge are clipped by the renderer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::library::Category;
use crate::tui::component::Component;

/// Strip of classification chips with the selected one marked.
pub struct CategoryBar {
    pub selected: Category,
}

impl CategoryBar {
    pub fn new(selected: Category) -> Self {
        Self { selected }
    }
}

/// Chip text for one category: its classNo digit and Korean label.
fn chip_text(category: Category) -> String {
    format!(" {} {} ", category.class_no(), category.label())
}

/// Column width of each chip including the one-column gap that follows it.
fn chip_widths() -> Vec<u16> {
    Category::ALL
        .iter()
        .map(|c| chip_text(*c).width() as u16 + 1)
        .collect()
}

/// Index of the first chip to draw so the selected chip fits in `avail`
/// columns. Walks forward from zero; never advances past the selection.
fn first_visible(selected_idx: usize, widths: &[u16], avail: u16) -> usize {
    let mut start = 0;
    while start < selected_idx && widths[start..=selected_idx].iter().sum::<u16>() > avail {
        start += 1;
    }
    start
}

impl Component for CategoryBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Categories ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let widths = chip_widths();
        let selected_idx = self.selected.class_no() as usize;
        let start = first_visible(selected_idx, &widths, inner.width);

        let mut spans = Vec::new();
        for category in &Category::ALL[start..] {
            let style = if *category == self.selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(chip_text(*category), style));
            spans.push(Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }
}
