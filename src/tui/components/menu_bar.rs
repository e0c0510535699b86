//! # MenuBar Component
//!
//! The static one-line banner at the top of the screen.
//!
//! ## Responsibilities
//!
//! - Own the one-row region at the top-left of the screen, 80 columns wide
//! - Write the fixed banner text into it, overwriting whatever was there
//!
//! Nothing about it is interactive or configurable: labels cannot be
//! selected and no sub-menus exist.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::Clear;

use crate::tui::component::Component;

/// Fixed width of the menu bar region.
pub const MENU_BAR_WIDTH: u16 = 80;

/// Banner text: one leading space, three spaces between labels.
pub const MENU_BAR_TEXT: &str = " File   About";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuBar;

impl MenuBar {
    /// Region the bar occupies inside `screen`: row 0, column 0, clipped.
    pub fn region(screen: Rect) -> Rect {
        Rect::new(
            screen.x,
            screen.y,
            MENU_BAR_WIDTH.min(screen.width),
            1.min(screen.height),
        )
    }
}

impl Component for MenuBar {
    /// Clears `area` first: the bar replaces anything drawn on that row.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        frame.render_widget(Clear, area);
        frame.render_widget(Span::raw(MENU_BAR_TEXT), area);
    }
}
