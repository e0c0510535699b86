use ratatui::Frame;

use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MenuBar, StatusLine};

/// Cell the help key name is echoed at.
pub const KEY_ECHO_CELL: (u16, u16) = (1, 1);

/// Draw everything the screen currently holds.
///
/// ratatui redraws the whole frame each time, so the retained screen lives
/// in `TuiState` and is replayed here in write order: status line, key
/// echo, then the menu bar over row 0.
pub fn draw_ui(frame: &mut Frame, tui: &mut TuiState) {
    let screen = frame.area();

    if let Some(status) = &tui.status_line {
        let area = StatusLine::region_at(screen, 0, 0);
        StatusLine::new(status).render(frame, area);
    }

    if let Some(name) = &tui.key_echo {
        let (x, y) = KEY_ECHO_CELL;
        let area = StatusLine::region_at(screen, x, y);
        StatusLine::new(name).render(frame, area);
    }

    if let Some(bar) = tui.menu_bar.as_mut() {
        bar.render(frame, MenuBar::region(screen));
    }
}
