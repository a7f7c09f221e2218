use crate::core::state::App;
use crate::library::Category;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BookList, CategoryBar, LandingPage, SPINNER, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

const HINTS: &str = "←/→ category · 0-9 jump · Enter search · ↑/↓ scroll · q quit";

/// Compose the full frame: title bar, category strip, results area, hints.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1)]);
    let [title_area, category_area, main_area, hints_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(
        app.library.name().to_string(),
        app.status_message.clone(),
        app.is_loading,
        spinner_frame,
    );
    title_bar.render(frame, title_area);

    CategoryBar::new(app.category).render(frame, category_area);

    // Results area - the chart, the in-flight spinner, or the landing page.
    // A search clears `books` first, so loading never overlaps a chart.
    if !app.books.is_empty() {
        BookList::new(&mut tui.book_list, &app.books).render(frame, main_area);
    } else if app.is_loading {
        draw_searching(frame, main_area, app.category, spinner_frame);
    } else {
        LandingPage.render(frame, main_area);
    }

    frame.render_widget(
        Span::styled(HINTS, Style::default().fg(Color::DarkGray)),
        hints_area,
    );
}

/// Centered spinner pane shown while the chart request is in flight.
fn draw_searching(frame: &mut Frame, area: Rect, category: Category, spinner_frame: usize) {
    let text = format!(
        "{} Searching {}...",
        SPINNER[spinner_frame % SPINNER.len()],
        category.label()
    );
    let layout = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, layout[0]);
}
