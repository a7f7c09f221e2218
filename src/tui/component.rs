use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data as props (struct fields) and render into a
/// `Rect` on the frame. Stateless ones like `TitleBar` are rebuilt every
/// frame from `App` fields; stateful ones like `BookList` borrow persistent
/// state that lives in `TuiState`.
///
/// # Mutability
///
/// `render` takes `&mut self` so components can update presentation state
/// (scroll offsets, cached heights) during the render pass. This aligns
/// with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that also consumes terminal events.
pub trait EventHandler {
    /// What the component reports back to the event loop, if anything.
    type Event;

    /// React to a `TuiEvent`, emitting an `Event` when the loop should act.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
