use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

/// Plain text written at a fixed cell, e.g. `Loading...` at (0, 0).
pub struct StatusLine<'a> {
    pub text: &'a str,
}

impl<'a> StatusLine<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// One-row region starting at (`x`, `y`) inside `screen`, clipped.
    pub fn region_at(screen: Rect, x: u16, y: u16) -> Rect {
        let row = Rect::new(
            screen.x.saturating_add(x),
            screen.y.saturating_add(y),
            screen.width.saturating_sub(x),
            1,
        );
        row.intersection(screen)
    }
}

impl Component for StatusLine<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        frame.render_widget(Span::raw(self.text), area);
    }
}
