//! # Landing Page Component
//!
//! Displayed in the results area before the first chart loads.
//!

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

pub struct LandingPage;

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use ratatui::layout::{Constraint, Flex, Layout};
        use ratatui::style::Modifier;
        use ratatui::text::{Line, Span};

        let mut text_lines = Vec::new();

        text_lines.push(Line::from(Span::styled(
            "Stacks",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));

        text_lines.push(Line::from(Span::styled(
            "Top 10 most borrowed books, by category",
            Style::default().fg(Color::DarkGray),
        )));

        let version_text = format!("v{}", env!("CARGO_PKG_VERSION"));
        text_lines.push(Line::from(Span::styled(
            version_text,
            Style::default().fg(Color::DarkGray),
        )));

        // Center the text block vertically in the empty results area.
        let text_height = text_lines.len() as u16;
        let vertical_layout = Layout::vertical([Constraint::Length(text_height)])
            .flex(Flex::Center)
            .split(area);

        let paragraph = Paragraph::new(text_lines).alignment(Alignment::Center);

        frame.render_widget(paragraph, vertical_layout[0]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_landing_page_centers_name_and_version() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                LandingPage.render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();

        assert!(text.contains("Stacks"));
        assert!(text.contains("most borrowed"));
        assert!(text.contains(&format!("v{}", env!("CARGO_PKG_VERSION"))));
    }
}
