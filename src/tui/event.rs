use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Name of the interrupt combination (Ctrl+C arrives as a key in raw mode).
pub const INTERRUPT_KEY: &str = "^C";
/// Name of the help combination.
pub const HELP_KEY: &str = "KEY_F(1)";

/// A single polled key: the raw code plus its symbolic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub name: String,
}

impl KeyPress {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            code,
            modifiers,
            name: key_name(code, modifiers),
        }
    }

    pub fn is_interrupt(&self) -> bool {
        self.name == INTERRUPT_KEY
    }

    pub fn is_help(&self) -> bool {
        self.name == HELP_KEY
    }
}

/// curses-style key names: `^C`, `KEY_F(1)`, `KEY_UP`, plain chars as themselves.
pub fn key_name(code: KeyCode, modifiers: KeyModifiers) -> String {
    match code {
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::CONTROL) => {
            format!("^{}", c.to_ascii_uppercase())
        }
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("KEY_F({n})"),
        KeyCode::Enter => "^J".to_string(),
        KeyCode::Tab => "^I".to_string(),
        KeyCode::Esc => "^[".to_string(),
        KeyCode::Backspace => "KEY_BACKSPACE".to_string(),
        KeyCode::Up => "KEY_UP".to_string(),
        KeyCode::Down => "KEY_DOWN".to_string(),
        KeyCode::Left => "KEY_LEFT".to_string(),
        KeyCode::Right => "KEY_RIGHT".to_string(),
        KeyCode::Home => "KEY_HOME".to_string(),
        KeyCode::End => "KEY_END".to_string(),
        KeyCode::PageUp => "KEY_PPAGE".to_string(),
        KeyCode::PageDown => "KEY_NPAGE".to_string(),
        KeyCode::Insert => "KEY_IC".to_string(),
        KeyCode::Delete => "KEY_DC".to_string(),
        KeyCode::BackTab => "KEY_BTAB".to_string(),
        _ => "UNKNOWN".to_string(),
    }
}

/// Source of key presses for the main loop.
pub trait InputSource {
    /// Return the most recent key press, or `None` when nothing is pending.
    /// Must never block.
    fn poll(&mut self) -> io::Result<Option<KeyPress>>;
}

/// Pick the key a poll reports from everything that was pending.
///
/// The latest key press wins, except that an interrupt is never
/// overwritten. Releases, repeats and non-key events are dropped.
pub fn latest_key<E>(events: E) -> Option<KeyPress>
where
    E: IntoIterator<Item = Event>,
{
    let mut latest: Option<KeyPress> = None;
    for event in events {
        let Event::Key(key_event) = event else {
            continue;
        };
        // Windows reports releases too
        if key_event.kind != KeyEventKind::Press {
            continue;
        }
        log::debug!(
            "Key event: {:?} with modifiers {:?}",
            key_event.code,
            key_event.modifiers
        );
        if latest.as_ref().is_some_and(KeyPress::is_interrupt) {
            continue;
        }
        latest = Some(KeyPress::new(key_event.code, key_event.modifiers));
    }
    latest
}

/// Reads key presses from the real terminal.
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    /// Drains the whole pending queue so nothing stale is left for the
    /// next poll, then reports via [`latest_key`].
    fn poll(&mut self) -> io::Result<Option<KeyPress>> {
        let mut pending = Vec::new();
        while event::poll(Duration::ZERO)? {
            pending.push(event::read()?);
        }
        Ok(latest_key(pending))
    }
}
